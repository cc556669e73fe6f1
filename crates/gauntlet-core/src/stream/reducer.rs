//! The event reducer state machine
//!
//! Coalesces consecutive `text_delta` events into one logical thinking
//! message and converts every other recognized event into exactly one
//! [`RenderEvent`]. The open accumulation is always flushed before a
//! different kind of event is emitted and once more at end of stream, so no
//! coalesced text is ever lost, duplicated, or reordered.
//!
//! One reducer serves exactly one run; construct a fresh one per task so no
//! stale accumulation leaks across runs.

use super::event::ParsedEvent;
use super::render::{shape_message, shape_tool_args, shape_tool_output, RenderEvent};

/// Accumulation state: at most one open coalesced text buffer
#[derive(Debug)]
enum Accumulation {
    Idle,
    Accumulating { buffer: String },
}

/// Incremental reducer from parsed events to render events
#[derive(Debug)]
pub struct EventReducer {
    state: Accumulation,
}

impl Default for EventReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl EventReducer {
    /// Create a reducer for one run
    pub fn new() -> Self {
        Self {
            state: Accumulation::Idle,
        }
    }

    /// Reduce one event, returning the render events it produces
    ///
    /// A `text_delta` only feeds the accumulation and produces nothing yet.
    /// Every other recognized kind first flushes the accumulation (zero or
    /// one thinking event) and then emits exactly one event of its own, so
    /// the result holds at most two entries.
    pub fn reduce(&mut self, event: ParsedEvent) -> Vec<RenderEvent> {
        match event {
            ParsedEvent::TextDelta { content } => {
                if !content.is_empty() {
                    match &mut self.state {
                        Accumulation::Accumulating { buffer } => buffer.push_str(&content),
                        Accumulation::Idle => {
                            self.state = Accumulation::Accumulating { buffer: content };
                        }
                    }
                }
                Vec::new()
            }
            ParsedEvent::Info => Vec::new(),
            ParsedEvent::Unknown { kind } => {
                tracing::debug!("skipping unrecognized stream event kind {kind:?}");
                Vec::new()
            }
            other => {
                let mut out = Vec::with_capacity(2);
                if let Some(thinking) = self.flush() {
                    out.push(thinking);
                }
                out.push(match other {
                    ParsedEvent::ToolCall {
                        tool_name,
                        tool_args,
                    } => RenderEvent::ToolCall {
                        name: tool_name,
                        args: shape_tool_args(&tool_args),
                    },
                    ParsedEvent::ToolOutput { output } => RenderEvent::ToolOutput {
                        body: shape_tool_output(&output),
                    },
                    ParsedEvent::Message { content } => RenderEvent::Message {
                        segments: shape_message(&content),
                    },
                    ParsedEvent::Final { summary } => RenderEvent::Final { summary },
                    ParsedEvent::Error { error } => RenderEvent::Error { message: error },
                    // TextDelta / Info / Unknown are handled above
                    _ => unreachable!("delta and noise kinds never reach emission"),
                });
                out
            }
        }
    }

    /// Signal end of stream, flushing any open accumulation exactly once
    pub fn finish(&mut self) -> Option<RenderEvent> {
        self.flush()
    }

    /// Close the open accumulation, trimming whitespace
    ///
    /// An all-whitespace buffer flushes to nothing.
    fn flush(&mut self) -> Option<RenderEvent> {
        match std::mem::replace(&mut self.state, Accumulation::Idle) {
            Accumulation::Accumulating { buffer } => {
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(RenderEvent::Thinking {
                        text: trimmed.to_string(),
                    })
                }
            }
            Accumulation::Idle => None,
        }
    }
}
