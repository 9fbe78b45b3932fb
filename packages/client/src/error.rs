//! Error types for the probe client.

use std::time::Duration;

use thiserror::Error;

/// Probe-specific errors
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Configuration rejected before connecting
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not establish the WebSocket connection
    #[error("Failed to connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// Read or write failure on an open connection
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Connection closed before the welcome frame arrived")]
    ClosedBeforeWelcome,

    #[error("Connection closed before a reply arrived")]
    ClosedBeforeReply,

    /// Binary frame whose payload is not valid UTF-8
    #[error("Received a binary frame that is not valid UTF-8 ({0} bytes)")]
    NonUtf8Frame(usize),

    /// No reply frame within the configured wait
    #[error("No reply within {0:?}")]
    ReplyTimeout(Duration),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failure writing the report
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Reply frame is not valid JSON
    #[error("Failed to decode reply as JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
