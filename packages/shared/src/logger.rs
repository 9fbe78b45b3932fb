//! Logging setup for clanker-probe binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LIBRARY_TARGET: &str = "clanker_probe";

/// Build the default filter directive for a binary.
///
/// Covers the `clanker_probe` library crate and the binary itself, both at
/// `default_log_level`.
pub fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    if binary_target == LIBRARY_TARGET {
        return format!("{}={}", LIBRARY_TARGET, default_log_level);
    }
    format!(
        "{}={},{}={}",
        LIBRARY_TARGET, default_log_level, binary_target, default_log_level
    )
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The level can be overridden with the `RUST_LOG` environment variable.
/// Log lines are written to stderr so that stdout only carries the probe report.
///
/// # Examples
///
/// ```no_run
/// use clanker_probe_shared::logger::setup_logger;
///
/// setup_logger("clanker-probe", "warn");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
