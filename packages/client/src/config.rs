//! Probe target and message configuration.

use std::time::Duration;

use crate::{error::ProbeError, protocol::ChannelType};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 18789;
pub const DEFAULT_PATH: &str = "/ws";
pub const DEFAULT_CHANNEL_ID: &str = "test";
pub const DEFAULT_MESSAGE: &str = "Say hello in one word";
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 60;

/// Everything a single probe round trip needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub channel_id: String,
    pub channel_type: ChannelType,
    pub message: String,
    /// Upper bound on the wait for the reply frame
    pub reply_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            channel_type: ChannelType::default(),
            message: DEFAULT_MESSAGE.to_string(),
            reply_timeout: Duration::from_secs(DEFAULT_REPLY_TIMEOUT_SECS),
        }
    }
}

impl ProbeConfig {
    /// Default configuration with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// WebSocket endpoint URI, e.g. `ws://127.0.0.1:18789/ws`
    pub fn url(&self) -> String {
        format!("ws://{}:{}{}", self.host, self.port, DEFAULT_PATH)
    }

    /// Reject a target or timeout that cannot produce a round trip.
    ///
    /// The channel and message are payload for the gateway and are sent as-is.
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.host.trim().is_empty() {
            return Err(ProbeError::InvalidConfig("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ProbeError::InvalidConfig(
                "port must be between 1 and 65535".to_string(),
            ));
        }
        if self.reply_timeout.is_zero() {
            return Err(ProbeError::InvalidConfig(
                "reply timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ClientFrame;

    #[test]
    fn test_default_config_targets_local_gateway() {
        // テスト項目: デフォルト設定がローカルのゲートウェイを指す
        // given (前提条件):
        let config = ProbeConfig::default();

        // when (操作):
        let url = config.url();

        // then (期待する結果):
        assert_eq!(url, "ws://127.0.0.1:18789/ws");
        assert_eq!(config.channel_id, "test");
        assert_eq!(config.channel_type, ChannelType::Telegram);
        assert_eq!(config.message, "Say hello in one word");
        assert_eq!(config.reply_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_with_message_keeps_other_defaults() {
        // テスト項目: メッセージだけを上書きし、他はデフォルトのまま
        // given (前提条件):
        let message = "ping";

        // when (操作):
        let config = ProbeConfig::with_message(message);

        // then (期待する結果):
        assert_eq!(config.message, "ping");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        // テスト項目: ポート 0 は拒否される
        // given (前提条件):
        let config = ProbeConfig {
            port: 0,
            ..ProbeConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(matches!(result, Err(ProbeError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_accepts_empty_message() {
        // テスト項目: 空のメッセージもそのまま送信対象として受け付けられる
        // given (前提条件):
        let config = ProbeConfig::with_message("");

        // when (操作):
        let result = config.validate();
        let frame = ClientFrame::send_message(
            config.channel_id.clone(),
            config.channel_type,
            config.message.clone(),
        );
        let serialized = serde_json::to_string(&frame).unwrap();

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(serialized.contains(r#""message":"""#));
    }

    #[test]
    fn test_validate_accepts_empty_channel_id() {
        // テスト項目: 空のチャンネル ID もゲートウェイ側の判断に委ねられる
        // given (前提条件):
        let config = ProbeConfig {
            channel_id: String::new(),
            ..ProbeConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        // テスト項目: 空白のみのホストは拒否される
        // given (前提条件):
        let config = ProbeConfig {
            host: "  ".to_string(),
            ..ProbeConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(matches!(result, Err(ProbeError::InvalidConfig(msg)) if msg.contains("host")));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        // テスト項目: タイムアウト 0 は拒否される
        // given (前提条件):
        let config = ProbeConfig {
            reply_timeout: Duration::ZERO,
            ..ProbeConfig::default()
        };

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(result.is_err());
    }
}
