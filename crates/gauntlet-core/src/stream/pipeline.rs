//! The full byte-stream → render-event pipeline
//!
//! Wires decoder, splitter, parser, and reducer over any fallible byte
//! stream (in practice `reqwest::Response::bytes_stream()`). All work for a
//! delivered chunk runs to completion before the next chunk is polled, so
//! render events come out in strict arrival order.

use super::decoder::{ChunkDecoder, FrameSplitter};
use super::event::parse_frame;
use super::reducer::EventReducer;
use super::render::RenderEvent;
use crate::error::{GauntletError, GauntletResult};
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;

/// Stream of render events produced from one agent run
pub type RenderStream = Pin<Box<dyn Stream<Item = GauntletResult<RenderEvent>> + Send>>;

struct PipelineState {
    decoder: ChunkDecoder,
    splitter: FrameSplitter,
    reducer: EventReducer,
    /// Set after a transport error; everything afterwards is drained silently
    failed: bool,
}

impl PipelineState {
    fn feed_text(&mut self, text: &str, out: &mut Vec<GauntletResult<RenderEvent>>) {
        for frame in self.splitter.push(text) {
            self.feed_frame(&frame, out);
        }
    }

    fn feed_frame(&mut self, frame: &str, out: &mut Vec<GauntletResult<RenderEvent>>) {
        if let Some(event) = parse_frame(frame) {
            out.extend(self.reducer.reduce(event).into_iter().map(Ok));
        }
    }
}

/// Reduce a chunked byte stream into a [`RenderStream`]
///
/// A transport error is surfaced exactly once as a stream item and halts all
/// further processing. End of stream flushes the decoder, the splitter
/// (flush-on-end frame policy), and finally the reducer's open accumulation.
pub fn reduce_byte_stream<B, E>(
    byte_stream: impl Stream<Item = Result<B, E>> + Send + 'static,
) -> RenderStream
where
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let state = Arc::new(tokio::sync::Mutex::new(PipelineState {
        decoder: ChunkDecoder::new(),
        splitter: FrameSplitter::new(),
        reducer: EventReducer::new(),
        failed: false,
    }));

    // A trailing sentinel drives the end-of-stream flush, which a plain
    // flat_map over the source could never observe.
    let stream = byte_stream
        .map(Some)
        .chain(futures::stream::once(async { None }))
        .flat_map(move |item| {
            let state = state.clone();
            futures::stream::once(async move {
                let mut state = state.lock().await;
                let mut out: Vec<GauntletResult<RenderEvent>> = Vec::new();

                if state.failed {
                    return futures::stream::iter(out);
                }

                match item {
                    Some(Ok(chunk)) => {
                        let text = state.decoder.decode(chunk.as_ref());
                        state.feed_text(&text, &mut out);
                    }
                    Some(Err(err)) => {
                        state.failed = true;
                        out.push(Err(GauntletError::agent(format!(
                            "stream transport error: {err}"
                        ))));
                    }
                    None => {
                        let tail = state.decoder.finish();
                        state.feed_text(&tail, &mut out);
                        if let Some(last_frame) = state.splitter.finish() {
                            state.feed_frame(&last_frame, &mut out);
                        }
                        if let Some(event) = state.reducer.finish() {
                            out.push(Ok(event));
                        }
                    }
                }

                futures::stream::iter(out)
            })
        })
        .flatten();

    Box::pin(stream)
}
