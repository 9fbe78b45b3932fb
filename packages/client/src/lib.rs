//! Round-trip smoke-test client for the Open Clanker gateway.
//!
//! Connects to the gateway WebSocket endpoint, reads the welcome frame, sends a
//! single `send_message` request and prints an interpretation of the reply.

pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod protocol;
pub mod runner;
pub mod session;
pub mod transport;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use runner::run_probe;
