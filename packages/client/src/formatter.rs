//! Report lines printed by the probe.

use crate::domain::{RAW_DUMP_CHARS, ReplyOutcome, WELCOME_PREVIEW_CHARS, truncate_chars};

/// Formatter for the probe's console report
pub struct ProbeFormatter;

impl ProbeFormatter {
    pub fn format_connecting(url: &str) -> String {
        format!("Connecting to {}...", url)
    }

    /// Format the welcome preview
    ///
    /// The welcome frame is cut to its first characters and always followed by
    /// an ellipsis, whether or not it was actually truncated.
    pub fn format_welcome(welcome: &str) -> String {
        format!(
            "Connected. Welcome: {}...",
            truncate_chars(welcome, WELCOME_PREVIEW_CHARS)
        )
    }

    pub fn format_sent(message: &str) -> String {
        format!("Sent: {}", message)
    }

    /// Format the classified reply
    ///
    /// # Arguments
    ///
    /// * `outcome` - The reply as classified by [`crate::domain::interpret_reply`]
    ///
    /// # Returns
    ///
    /// A single report line
    pub fn format_outcome(outcome: &ReplyOutcome) -> String {
        match outcome {
            ReplyOutcome::AiReply(content) => format!("AI reply: {}", content),
            ReplyOutcome::Failed(error) => format!("Error: {}", error),
            ReplyOutcome::Unrecognized(raw) => {
                format!("Response: {}", truncate_chars(raw, RAW_DUMP_CHARS))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_connecting() {
        // テスト項目: 接続先 URL が表示される
        // given (前提条件):
        let url = "ws://127.0.0.1:18789/ws";

        // when (操作):
        let result = ProbeFormatter::format_connecting(url);

        // then (期待する結果):
        assert_eq!(result, "Connecting to ws://127.0.0.1:18789/ws...");
    }

    #[test]
    fn test_format_welcome_truncates_long_frames() {
        // テスト項目: 長いウェルカムフレームは 100 文字で切られる
        // given (前提条件):
        let welcome = "w".repeat(250);

        // when (操作):
        let result = ProbeFormatter::format_welcome(&welcome);

        // then (期待する結果):
        assert_eq!(result, format!("Connected. Welcome: {}...", "w".repeat(100)));
    }

    #[test]
    fn test_format_welcome_short_frame() {
        // テスト項目: 短いウェルカムフレームはそのまま表示され、省略記号が付く
        // given (前提条件):
        let welcome = r#"{"type":"health"}"#;

        // when (操作):
        let result = ProbeFormatter::format_welcome(welcome);

        // then (期待する結果):
        assert_eq!(result, r#"Connected. Welcome: {"type":"health"}..."#);
    }

    #[test]
    fn test_format_sent() {
        // テスト項目: 送信したメッセージが表示される
        // given (前提条件):
        let message = "ping";

        // when (操作):
        let result = ProbeFormatter::format_sent(message);

        // then (期待する結果):
        assert_eq!(result, "Sent: ping");
    }

    #[test]
    fn test_format_ai_reply() {
        // テスト項目: AI の返答が表示される
        // given (前提条件):
        let outcome = ReplyOutcome::AiReply("hi".to_string());

        // when (操作):
        let result = ProbeFormatter::format_outcome(&outcome);

        // then (期待する結果):
        assert_eq!(result, "AI reply: hi");
    }

    #[test]
    fn test_format_failed_reply() {
        // テスト項目: エラー文字列が表示される
        // given (前提条件):
        let outcome = ReplyOutcome::Failed("boom".to_string());

        // when (操作):
        let result = ProbeFormatter::format_outcome(&outcome);

        // then (期待する結果):
        assert_eq!(result, "Error: boom");
    }

    #[test]
    fn test_format_unrecognized_reply_is_truncated() {
        // テスト項目: 未認識の返答は 300 文字に切り詰めて表示される
        // given (前提条件):
        let raw = format!(r#"{{"type":"pong","data":"{}"}}"#, "x".repeat(400));
        let outcome = ReplyOutcome::Unrecognized(raw.clone());

        // when (操作):
        let result = ProbeFormatter::format_outcome(&outcome);

        // then (期待する結果):
        assert!(result.starts_with("Response: {\"type\":\"pong\""));
        assert_eq!(result.chars().count(), "Response: ".len() + 300);
    }
}
