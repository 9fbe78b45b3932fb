//! Probe execution: connect, run the round trip, always close.

use std::io::Write;

use tokio_tungstenite::connect_async;

use crate::{
    config::ProbeConfig, domain::ReplyOutcome, error::ProbeError, formatter::ProbeFormatter,
    session::run_probe_session, transport::FrameTransport,
};

/// Run the probe against the configured gateway and write the report to `out`.
///
/// The configuration is validated before any network activity. Failures are
/// returned as-is; nothing is retried.
pub async fn run_probe<W: Write>(
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ReplyOutcome, ProbeError> {
    config.validate()?;

    let url = config.url();
    writeln!(out, "{}", ProbeFormatter::format_connecting(&url))?;

    let (mut ws_stream, response) =
        connect_async(url.as_str())
            .await
            .map_err(|source| ProbeError::Connection {
                url: url.clone(),
                source,
            })?;
    tracing::info!("Connected to {} (HTTP {})", url, response.status());

    let result = run_probe_session(&mut ws_stream, config, out).await;

    // Release the connection on every path, including timeout and decode failure
    if let Err(e) = ws_stream.shutdown().await {
        tracing::debug!("Close handshake did not complete: {}", e);
    }

    result
}
