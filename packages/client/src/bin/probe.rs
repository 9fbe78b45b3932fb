//! Smoke-test client for the Open Clanker gateway WebSocket API.
//!
//! Connects to the gateway at `ws://127.0.0.1:18789/ws`, reads the welcome
//! frame, sends one message to the `test` telegram channel and prints the
//! assistant's reply.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin clanker-probe
//! cargo run --bin clanker-probe -- "What is the capital of France?"
//! ```

use clanker_probe::{ProbeConfig, config::DEFAULT_MESSAGE};
use clanker_probe_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clanker-probe")]
#[command(about = "Send one message to an Open Clanker gateway and print the reply", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Message to send. Only the first argument is used, verbatim.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Args {
    fn message(&self) -> String {
        self.words
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
    }
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();
    let config = ProbeConfig::with_message(args.message());

    let mut stdout = std::io::stdout();
    match clanker_probe::run_probe(&config, &mut stdout).await {
        Ok(outcome) => tracing::debug!("Probe finished: {:?}", outcome),
        Err(e) => {
            tracing::error!("Probe error: {}", e);
            std::process::exit(1);
        }
    }
}
