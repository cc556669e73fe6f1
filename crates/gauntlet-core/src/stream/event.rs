//! Wire-frame parsing
//!
//! The agent service speaks an SSE-style line protocol: each frame is one
//! `data: `-prefixed line whose remainder is a JSON object carrying a
//! `display_type`/`type` discriminator. Anything else on the wire (blank
//! keep-alive lines, comments) is presentation noise and is skipped.

use serde_json::Value;

/// Line prefix that marks a data frame
pub const DATA_PREFIX: &str = "data: ";

/// A decoded, classified event from one wire frame
///
/// Unrecognized discriminators are preserved as [`ParsedEvent::Unknown`] so
/// the reducer can drop them deliberately instead of the parser guessing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEvent {
    /// Incremental thinking text
    TextDelta { content: String },
    /// One tool invocation; `tool_args` is often itself JSON
    ToolCall { tool_name: String, tool_args: String },
    /// Result of the most recent tool invocation
    ToolOutput { output: String },
    /// A complete standalone message
    Message { content: String },
    /// Terminal success payload
    Final { summary: String },
    /// Failure notice, terminal or not
    Error { error: String },
    /// Operational noise, always dropped
    Info,
    /// A discriminator this console does not know
    Unknown { kind: String },
}

/// Parse one frame into an event
///
/// Returns `None` for non-`data: ` lines (silently) and for `data: ` lines
/// whose payload is not valid JSON (with a warning). Neither case is fatal;
/// the stream continues with the next frame.
pub fn parse_frame(frame: &str) -> Option<ParsedEvent> {
    let payload = frame.strip_prefix(DATA_PREFIX)?;

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("dropping malformed stream frame: {err}");
            return None;
        }
    };

    // The producer emits `type`; some emit a presentation-specific
    // `display_type` override which takes precedence.
    let kind = value["display_type"]
        .as_str()
        .or_else(|| value["type"].as_str())
        .unwrap_or("");

    let event = match kind {
        "text_delta" => ParsedEvent::TextDelta {
            content: string_field(&value, "content"),
        },
        "tool_call" => ParsedEvent::ToolCall {
            tool_name: value["tool_name"]
                .as_str()
                .unwrap_or("Tool")
                .to_string(),
            tool_args: string_field(&value, "tool_args"),
        },
        "tool_output" => ParsedEvent::ToolOutput {
            output: string_field(&value, "output"),
        },
        "message" => ParsedEvent::Message {
            content: string_field(&value, "content"),
        },
        "final" => ParsedEvent::Final {
            summary: value["summary"]
                .as_str()
                .unwrap_or("Task completed")
                .to_string(),
        },
        "error" => ParsedEvent::Error {
            error: value["error"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string(),
        },
        "info" => ParsedEvent::Info,
        other => ParsedEvent::Unknown {
            kind: other.to_string(),
        },
    };

    Some(event)
}

fn string_field(value: &Value, field: &str) -> String {
    value[field].as_str().unwrap_or_default().to_string()
}
