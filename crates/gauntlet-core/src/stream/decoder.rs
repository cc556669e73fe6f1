//! Byte-level stages of the stream pipeline
//!
//! [`ChunkDecoder`] turns raw network chunks into text, carrying an
//! incomplete UTF-8 sequence across chunk boundaries so a multi-byte
//! character split by the transport never corrupts. [`FrameSplitter`] cuts
//! the decoded text into newline-terminated frames, carrying the unfinished
//! trailing line the same way. Both are driven strictly in arrival order.

/// Streaming UTF-8 decoder
///
/// `decode` never fails: an incomplete trailing sequence (at most 3 bytes)
/// is buffered for the next chunk, and anything invalid in the interior
/// degrades to U+FFFD.
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    /// Incomplete UTF-8 byte sequence held over from the previous chunk
    incomplete_utf8: Vec<u8>,
}

impl ChunkDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk, returning all text that is complete so far
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let bytes = if self.incomplete_utf8.is_empty() {
            chunk.to_vec()
        } else {
            let mut combined = std::mem::take(&mut self.incomplete_utf8);
            combined.extend_from_slice(chunk);
            combined
        };

        let (text, remainder) = Self::split_utf8(&bytes);
        self.incomplete_utf8 = remainder;
        text
    }

    /// Flush the decoder at end of stream
    ///
    /// Any bytes still held (a sequence the stream never completed) decode
    /// lossily to U+FFFD rather than being dropped.
    pub fn finish(&mut self) -> String {
        if self.incomplete_utf8.is_empty() {
            return String::new();
        }
        let leftover = std::mem::take(&mut self.incomplete_utf8);
        tracing::warn!(
            "stream ended with {} undecodable trailing byte(s)",
            leftover.len()
        );
        String::from_utf8_lossy(&leftover).into_owned()
    }

    /// Number of bytes currently buffered
    pub fn pending_len(&self) -> usize {
        self.incomplete_utf8.len()
    }

    /// Split bytes into decodable text and a possibly-incomplete tail
    ///
    /// Scans backwards from the end for a multi-byte sequence the chunk cut
    /// short; that tail is returned for buffering. The rest decodes lossily
    /// so interior garbage becomes U+FFFD instead of stalling the pipeline.
    fn split_utf8(bytes: &[u8]) -> (String, Vec<u8>) {
        // Fast path for complete UTF-8
        if let Ok(s) = std::str::from_utf8(bytes) {
            return (s.to_string(), Vec::new());
        }

        let mut valid_end = bytes.len();

        for i in 1..=4.min(bytes.len()) {
            let pos = bytes.len() - i;
            let byte = bytes[pos];

            if !Self::is_continuation_byte(byte) {
                let expected_len = Self::utf8_char_len(byte);
                let actual_remaining = bytes.len() - pos;

                if actual_remaining < expected_len {
                    valid_end = pos;
                }
                break;
            }
        }

        let text = String::from_utf8_lossy(&bytes[..valid_end]).into_owned();
        (text, bytes[valid_end..].to_vec())
    }

    /// Check if a byte is a UTF-8 continuation byte (10xxxxxx)
    #[inline]
    fn is_continuation_byte(byte: u8) -> bool {
        (byte & 0b1100_0000) == 0b1000_0000
    }

    /// Expected length of a UTF-8 character from its first byte
    #[inline]
    fn utf8_char_len(first_byte: u8) -> usize {
        if first_byte & 0b1000_0000 == 0 {
            1
        } else if first_byte & 0b1110_0000 == 0b1100_0000 {
            2
        } else if first_byte & 0b1111_0000 == 0b1110_0000 {
            3
        } else if first_byte & 0b1111_1000 == 0b1111_0000 {
            4
        } else {
            1
        }
    }
}

/// Newline framing with carry-over of the unterminated trailing line
///
/// A frame exists only once its terminating `\n` has been seen; the tail
/// after the last newline stays pending until a later `push` (or `finish`)
/// completes it. A trailing `\r` is stripped from each frame so CRLF streams
/// behave like LF streams.
#[derive(Debug, Default)]
pub struct FrameSplitter {
    pending: String,
}

impl FrameSplitter {
    /// Create a new splitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed decoded text, returning every frame completed by it
    pub fn push(&mut self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.pending.push_str(text);

        let mut frames = Vec::new();
        while let Some(pos) = self.pending.find('\n') {
            let mut frame: String = self.pending.drain(..=pos).collect();
            frame.pop();
            if frame.ends_with('\r') {
                frame.pop();
            }
            frames.push(frame);
        }
        frames
    }

    /// Flush at end of stream
    ///
    /// Policy: flush-on-end. A producer that omits the final newline would
    /// otherwise lose its last frame, so a non-empty pending tail is emitted
    /// as one final frame. An empty tail yields nothing.
    pub fn finish(&mut self) -> Option<String> {
        let mut tail = std::mem::take(&mut self.pending);
        if tail.ends_with('\r') {
            tail.pop();
        }
        if tail.is_empty() {
            None
        } else {
            Some(tail)
        }
    }

    /// Whether an unterminated line is currently buffered
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
