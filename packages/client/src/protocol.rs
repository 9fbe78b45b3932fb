//! Wire types for the gateway WebSocket protocol.
//!
//! Only the outbound request is typed. Replies stay as `serde_json::Value`
//! and are interpreted permissively in [`crate::domain`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// `type` marker of the gateway's reply to `send_message`
pub const SEND_RESPONSE_TYPE: &str = "send_response";

/// Messaging platform behind a channel, interpreted by the gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    #[default]
    Telegram,
    Discord,
    Slack,
    WhatsApp,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Telegram => "telegram",
            ChannelType::Discord => "discord",
            ChannelType::Slack => "slack",
            ChannelType::WhatsApp => "whatsapp",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame sent from the probe to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Deliver a message to a channel and ask for the assistant's reply
    SendMessage {
        channel_id: String,
        channel_type: ChannelType,
        message: String,
    },
}

impl ClientFrame {
    pub fn send_message(
        channel_id: impl Into<String>,
        channel_type: ChannelType,
        message: impl Into<String>,
    ) -> Self {
        Self::SendMessage {
            channel_id: channel_id.into(),
            channel_type,
            message: message.into(),
        }
    }
}
