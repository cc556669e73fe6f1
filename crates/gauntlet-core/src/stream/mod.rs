//! Incremental event-stream reduction
//!
//! Turns the agent service's live, chunked byte stream into a well-formed
//! sequence of discrete render events:
//!
//! bytes → [`ChunkDecoder`] → [`FrameSplitter`] → [`parse_frame`] →
//! [`EventReducer`] → ordered [`RenderEvent`]s
//!
//! Partial network chunks, partial lines, partial UTF-8 sequences, and
//! malformed frames are all handled without losing, duplicating, or
//! reordering data.

mod decoder;
mod event;
mod pipeline;
mod reducer;
mod render;

pub use decoder::{ChunkDecoder, FrameSplitter};
pub use event::{parse_frame, ParsedEvent, DATA_PREFIX};
pub use pipeline::{reduce_byte_stream, RenderStream};
pub use reducer::EventReducer;
pub use render::{MessageSegment, OutputBody, RenderEvent, ToolArgs};
