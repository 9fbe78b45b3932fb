//! Reply interpretation.
//!
//! Pure functions without side effects, kept apart from the session so they
//! can be tested without a connection.

use serde_json::Value;

use crate::{error::ProbeError, protocol::SEND_RESPONSE_TYPE};

/// Characters of the welcome frame shown in the preview
pub const WELCOME_PREVIEW_CHARS: usize = 100;
/// Characters of an unrecognized reply shown in the raw dump
pub const RAW_DUMP_CHARS: usize = 300;

const UNKNOWN_ERROR: &str = "Unknown";

/// What a reply frame turned out to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// `send_response` carrying assistant content
    AiReply(String),
    /// `send_response` without usable content
    Failed(String),
    /// Anything else; holds the raw frame text
    Unrecognized(String),
}

/// Decode a reply frame and classify it.
///
/// Malformed JSON is an error. A well-formed value that does not match the
/// expected shape is never an error: missing fields read as empty.
pub fn interpret_reply(raw: &str) -> Result<ReplyOutcome, ProbeError> {
    let value: Value = serde_json::from_str(raw).map_err(ProbeError::Decode)?;

    if value.get("type").and_then(Value::as_str) != Some(SEND_RESPONSE_TYPE) {
        return Ok(ReplyOutcome::Unrecognized(raw.to_string()));
    }

    let data = value.get("data");
    let success = data_field(data, "success");
    let content = data_field(data, "content");
    if is_truthy(success) && is_truthy(content) {
        return Ok(ReplyOutcome::AiReply(display_value(content)));
    }

    let error = match data_field(data, "error") {
        // An explicit `null` prints the same as a missing field
        Value::Null => UNKNOWN_ERROR.to_string(),
        other => display_value(other),
    };
    Ok(ReplyOutcome::Failed(error))
}

static NULL: Value = Value::Null;

/// Field of the reply's `data` object, `null` when either is absent.
fn data_field<'a>(data: Option<&'a Value>, name: &str) -> &'a Value {
    data.and_then(|d| d.get(name)).unwrap_or(&NULL)
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings print bare; other values print as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
