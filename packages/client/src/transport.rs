//! Frame-level transport abstraction over a WebSocket connection.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::{WebSocketStream, tungstenite::protocol::Message};

use crate::error::ProbeError;

/// Text-frame transport used by the probe session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FrameTransport: Send {
    /// Next data frame as text, skipping ping/pong. `None` once the peer closes.
    async fn next_text(&mut self) -> Result<Option<String>, ProbeError>;

    async fn send_text(&mut self, text: String) -> Result<(), ProbeError>;

    /// Send a close frame and flush.
    async fn shutdown(&mut self) -> Result<(), ProbeError>;
}

#[async_trait]
impl<S> FrameTransport for WebSocketStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn next_text(&mut self) -> Result<Option<String>, ProbeError> {
        while let Some(message) = self.next().await {
            match message? {
                Message::Text(text) => return Ok(Some(text.as_str().to_owned())),
                Message::Binary(data) => {
                    let len = data.len();
                    return String::from_utf8(data.to_vec())
                        .map(Some)
                        .map_err(|_| ProbeError::NonUtf8Frame(len));
                }
                Message::Close(frame) => {
                    tracing::debug!("Server closed the connection: {:?}", frame);
                    return Ok(None);
                }
                other => {
                    tracing::trace!("Skipping control frame: {:?}", other);
                }
            }
        }
        Ok(None)
    }

    async fn send_text(&mut self, text: String) -> Result<(), ProbeError> {
        self.send(Message::Text(text.into())).await?;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<(), ProbeError> {
        WebSocketStream::close(self, None).await?;
        Ok(())
    }
}
