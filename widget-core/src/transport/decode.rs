//! Incremental decoding of a one-shot response body.
//!
//! The backend streams an answer as raw UTF-8 bytes with no framing; chunk
//! boundaries land anywhere, including inside a multi-byte character. The
//! decoder buffers an incomplete trailing sequence instead of emitting
//! replacement characters for it.

use bytes::Bytes;
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};

use crate::error::{WidgetError, WidgetResult};

/// Incremental UTF-8 decoder that survives chunk boundaries.
///
/// Invariant: for any byte sequence and any chunking of it, concatenating the
/// `push` outputs plus `finish` equals a whole-buffer lossy decode of the
/// sequence.
#[derive(Debug, Default)]
pub struct Utf8Accumulator {
    carry: Vec<u8>,
}

impl Utf8Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the carried bytes plus `chunk` up to the last complete
    /// character, keeping an incomplete trailing sequence for the next call.
    /// Invalid interior sequences decode to U+FFFD.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        let mut buf = std::mem::take(&mut self.carry);
        buf.extend_from_slice(chunk);

        let mut out = String::with_capacity(buf.len());
        let mut pos = 0;
        while pos < buf.len() {
            match std::str::from_utf8(&buf[pos..]) {
                Ok(valid) => {
                    out.push_str(valid);
                    pos = buf.len();
                }
                Err(err) => {
                    let end = pos + err.valid_up_to();
                    out.push_str(std::str::from_utf8(&buf[pos..end]).unwrap_or(""));
                    match err.error_len() {
                        Some(invalid) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            pos = end + invalid;
                        }
                        None => {
                            // Incomplete trailing sequence; hold it back.
                            self.carry = buf[end..].to_vec();
                            pos = buf.len();
                        }
                    }
                }
            }
        }
        out
    }

    /// Flush at end of stream. A dangling partial character becomes U+FFFD,
    /// matching what a whole-buffer lossy decode would produce.
    pub fn finish(&mut self) -> String {
        if self.carry.is_empty() {
            String::new()
        } else {
            self.carry.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }

    /// Bytes currently held back waiting for the rest of a character.
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}

/// Lazy sequence of decoded text fragments over a response body.
///
/// Single consumption, not restartable. Dropping the handle drops the
/// underlying reader, so an abandoned stream leaves no reader attached to
/// the response body.
pub struct TextStream {
    inner: BoxStream<'static, Result<Bytes, reqwest::Error>>,
    decoder: Utf8Accumulator,
    done: bool,
}

impl TextStream {
    pub(crate) fn new(
        stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    ) -> Self {
        Self {
            inner: stream.boxed(),
            decoder: Utf8Accumulator::new(),
            done: false,
        }
    }

    /// Next decoded fragment, or `None` once the stream is exhausted. After
    /// an error or the end signal no further chunks are requested upstream.
    pub async fn next(&mut self) -> Option<WidgetResult<String>> {
        if self.done {
            return None;
        }
        loop {
            match self.inner.next().await {
                Some(Ok(chunk)) => {
                    let text = self.decoder.push(&chunk);
                    // A chunk can end mid-character and decode to nothing;
                    // keep reading rather than yielding an empty fragment.
                    if !text.is_empty() {
                        return Some(Ok(text));
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(WidgetError::Network(err.to_string())));
                }
                None => {
                    self.done = true;
                    let tail = self.decoder.finish();
                    if tail.is_empty() {
                        return None;
                    }
                    return Some(Ok(tail));
                }
            }
        }
    }

    /// Drain the remaining fragments into one string.
    pub async fn collect_text(mut self) -> WidgetResult<String> {
        let mut out = String::new();
        while let Some(fragment) = self.next().await {
            out.push_str(&fragment?);
        }
        Ok(out)
    }
}
