//! Render events and content shaping
//!
//! A [`RenderEvent`] is one finalized, immutable thing to display. The
//! reducer emits them in logical order; the presentation layer applies them
//! however it likes and never needs to reach back into reducer state.
//!
//! Shaping rules (argument field priority, truncation thresholds, terminal
//! vs. code styling) live here so the reducer stays a pure state machine.

use crate::classify::{classify, Language};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

/// Pretty-printed tool-call JSON is cut at this many characters
const TOOL_ARGS_JSON_MAX: usize = 400;
/// Raw (non-JSON) tool-call arguments are cut here
const TOOL_ARGS_RAW_MAX: usize = 200;
/// Code and terminal-style tool output are cut here
const TOOL_OUTPUT_BLOCK_MAX: usize = 800;
/// Short plain tool output is cut here
const TOOL_OUTPUT_PLAIN_MAX: usize = 500;
/// Message content is cut here before fence extraction
const MESSAGE_MAX: usize = 500;
/// Output longer than this with embedded newlines gets terminal styling
const TERMINAL_STYLE_MIN: usize = 50;
/// An indented region must be at least this long to count as a code block
const INDENT_BLOCK_MIN: usize = 50;

/// Shaped arguments of a tool invocation, in recognition priority order
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    /// A `code` field; language is classified, defaulting to Python
    Code { language: Language, code: String },
    /// A `command` field, always rendered as shell
    Command { command: String },
    /// A `query` field, always rendered as SQL
    Query { query: String },
    /// A `url` field
    Url { url: String },
    /// Some other JSON object or array, pretty-printed and truncated
    Json { pretty: String },
    /// Not JSON at all; raw text, truncated
    Raw { text: String },
}

/// Shaped body of a tool output
#[derive(Debug, Clone, PartialEq)]
pub enum OutputBody {
    /// Classified as code
    Code { language: Language, text: String },
    /// Long multi-line output, terminal styling
    Terminal { text: String },
    /// Short plain output
    Plain { text: String },
}

/// One piece of a standalone message after code-fence extraction
#[derive(Debug, Clone, PartialEq)]
pub enum MessageSegment {
    /// Plain prose
    Text(String),
    /// A fenced, indented, or whole-message code block
    Code {
        language: Option<Language>,
        code: String,
    },
    /// Inline backtick span
    Inline(String),
}

/// A finalized unit of output, ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// A completed, coalesced thinking message (whitespace-trimmed)
    Thinking { text: String },
    /// One tool invocation with shaped arguments
    ToolCall { name: String, args: ToolArgs },
    /// The output of the most recent tool invocation
    ToolOutput { body: OutputBody },
    /// A standalone message, split into prose and code segments
    Message { segments: Vec<MessageSegment> },
    /// Terminal success; summary is verbatim and never truncated
    Final { summary: String },
    /// A failure notice, verbatim
    Error { message: String },
}

/// Truncate to a character budget, appending `...` when cut
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    let mut end = text.len();
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            end = idx;
            break;
        }
        count += 1;
    }
    if end == text.len() {
        text.to_string()
    } else {
        format!("{}...", &text[..end])
    }
}

/// Shape tool-call arguments by speculative JSON parsing
///
/// Recognized object fields are checked in a fixed priority: `code`, then
/// `command`, then `query`, then `url`. Any other object (or array) is
/// pretty-printed; a payload that is not JSON shows as truncated raw text.
pub(crate) fn shape_tool_args(raw: &str) -> ToolArgs {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            if let Some(obj) = value.as_object() {
                if let Some(code) = obj.get("code").and_then(Value::as_str) {
                    return ToolArgs::Code {
                        language: classify(code).unwrap_or(Language::Python),
                        code: code.to_string(),
                    };
                }
                if let Some(command) = obj.get("command").and_then(Value::as_str) {
                    return ToolArgs::Command {
                        command: command.to_string(),
                    };
                }
                if let Some(query) = obj.get("query").and_then(Value::as_str) {
                    return ToolArgs::Query {
                        query: query.to_string(),
                    };
                }
                if let Some(url) = obj.get("url").and_then(Value::as_str) {
                    return ToolArgs::Url {
                        url: url.to_string(),
                    };
                }
            }
            // Object without recognized fields, or an array: compact JSON view
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string());
            return ToolArgs::Json {
                pretty: truncate(&pretty, TOOL_ARGS_JSON_MAX),
            };
        }
    }
    ToolArgs::Raw {
        text: truncate(raw, TOOL_ARGS_RAW_MAX),
    }
}

/// Shape tool output: code block, terminal block, or plain text
pub(crate) fn shape_tool_output(output: &str) -> OutputBody {
    if let Some(language) = classify(output) {
        OutputBody::Code {
            language,
            text: truncate(output, TOOL_OUTPUT_BLOCK_MAX),
        }
    } else if output.contains('\n') && output.chars().count() > TERMINAL_STYLE_MIN {
        OutputBody::Terminal {
            text: truncate(output, TOOL_OUTPUT_BLOCK_MAX),
        }
    } else {
        OutputBody::Plain {
            text: truncate(output, TOOL_OUTPUT_PLAIN_MAX),
        }
    }
}

lazy_static! {
    static ref FENCE_RE: Regex = Regex::new(r"```(\w*)\n?(?s:(.*?))```").unwrap();
    static ref INDENT_RE: Regex = Regex::new(r"(?m)^((?:    |\t).+\n?)+").unwrap();
    static ref INLINE_RE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref INDENT_PREFIX_RE: Regex = Regex::new(r"(?m)^(    |\t)").unwrap();
}

/// Split message content into prose and code segments
///
/// Truncates first, then checks the whole message against the classifier,
/// then extracts ``` fences, then falls back to the indented-block
/// heuristic, and finally pulls inline backtick spans out of the prose.
pub(crate) fn shape_message(content: &str) -> Vec<MessageSegment> {
    let content = truncate(content, MESSAGE_MAX);

    if let Some(language) = classify(&content) {
        return vec![MessageSegment::Code {
            language: Some(language),
            code: content,
        }];
    }

    let mut segments = Vec::new();
    let mut last_end = 0;
    for captures in FENCE_RE.captures_iter(&content) {
        let whole = captures.get(0).expect("capture 0 always present");
        if whole.start() > last_end {
            push_prose(&mut segments, &content[last_end..whole.start()]);
        }
        let tag = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        let code = captures
            .get(2)
            .map(|m| m.as_str().trim())
            .unwrap_or("")
            .to_string();
        let language = Language::from_tag(tag).or_else(|| classify(&code));
        segments.push(MessageSegment::Code { language, code });
        last_end = whole.end();
    }

    if last_end > 0 {
        if last_end < content.len() {
            push_prose(&mut segments, &content[last_end..]);
        }
        return segments;
    }

    // No fences: a sufficiently long indented region is treated as code
    if let Some(m) = INDENT_RE.find(&content) {
        if m.as_str().len() > INDENT_BLOCK_MIN {
            let code = INDENT_PREFIX_RE.replace_all(m.as_str(), "").to_string();
            let code = code.trim().to_string();
            if m.start() > 0 {
                push_prose(&mut segments, &content[..m.start()]);
            }
            segments.push(MessageSegment::Code {
                language: classify(&code),
                code,
            });
            if m.end() < content.len() {
                push_prose(&mut segments, &content[m.end()..]);
            }
            return segments;
        }
    }

    push_prose(&mut segments, &content);
    segments
}

/// Append prose, splitting out inline backtick spans
fn push_prose(segments: &mut Vec<MessageSegment>, text: &str) {
    let mut last_end = 0;
    for captures in INLINE_RE.captures_iter(text) {
        let whole = captures.get(0).expect("capture 0 always present");
        if whole.start() > last_end {
            segments.push(MessageSegment::Text(text[last_end..whole.start()].to_string()));
        }
        let span = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        segments.push(MessageSegment::Inline(span.to_string()));
        last_end = whole.end();
    }
    if last_end < text.len() {
        segments.push(MessageSegment::Text(text[last_end..].to_string()));
    }
}
