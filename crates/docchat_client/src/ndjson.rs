//! Newline-delimited JSON decoding
//!
//! The decoder is sans-IO: it is fed raw byte buffers of arbitrary size and
//! hands back every complete record. Lines are split on raw bytes, so a
//! multi-byte character cut between two network reads is reassembled before
//! it is decoded.

use docchat_core::StreamEvent;
use futures::{Stream, StreamExt};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    carry: Vec<u8>,
    malformed: usize,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `bytes` and returns the records completed by them, in order.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Value> {
        let scan_from = self.carry.len();
        self.carry.extend_from_slice(bytes);

        let mut records = Vec::new();
        let mut line_start = 0;
        let mut cursor = scan_from;
        while let Some(offset) = self.carry[cursor..].iter().position(|b| *b == b'\n') {
            let line_end = cursor + offset;
            if let Some(record) = self.decode_line(line_start, line_end) {
                records.push(record);
            }
            line_start = line_end + 1;
            cursor = line_start;
        }
        if line_start > 0 {
            self.carry.drain(..line_start);
        }
        records
    }

    /// Ends the stream. An unterminated trailing segment is discarded;
    /// returns how many bytes were dropped.
    pub fn finish(&mut self) -> usize {
        let dropped = self.carry.len();
        if self.carry.iter().any(|b| !b.is_ascii_whitespace()) {
            tracing::warn!(bytes = dropped, "discarding unterminated record at end of stream");
        }
        self.carry.clear();
        dropped
    }

    /// Lines skipped so far because they were not valid UTF-8 JSON.
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    pub fn pending_bytes(&self) -> usize {
        self.carry.len()
    }

    fn decode_line(&mut self, start: usize, end: usize) -> Option<Value> {
        let raw = &self.carry[start..end];
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(e) => {
                self.malformed += 1;
                tracing::warn!(error = %e, "skipping line that is not valid UTF-8");
                return None;
            }
        };
        if line.is_empty() {
            return None;
        }
        match serde_json::from_str(line) {
            Ok(value) => Some(value),
            Err(e) => {
                self.malformed += 1;
                tracing::warn!(error = %e, line = %truncate(line, 120), "skipping malformed stream line");
                None
            }
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Decodes a byte stream into JSON records. A transport error is yielded
/// once and ends the stream.
pub fn decode_records<S, B, E>(bytes: S) -> impl Stream<Item = Result<Value, E>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    async_stream::stream! {
        let mut decoder = NdjsonDecoder::new();
        let mut bytes = std::pin::pin!(bytes);

        while let Some(chunk) = bytes.next().await {
            match chunk {
                Ok(buf) => {
                    for record in decoder.push(buf.as_ref()) {
                        yield Ok(record);
                    }
                }
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }
        decoder.finish();
    }
}

/// Decodes a byte stream into answer events, dropping unknown record types
/// and records with the wrong shape.
pub fn decode_events<S, B, E>(bytes: S) -> impl Stream<Item = Result<StreamEvent, E>>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    decode_records(bytes).filter_map(|item| async move {
        match item {
            Ok(record) => match StreamEvent::from_record(record) {
                Ok(Some(event)) => Some(Ok(event)),
                Ok(None) => {
                    tracing::debug!("ignoring stream record of unknown type");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping stream record");
                    None
                }
            },
            Err(e) => Some(Err(e)),
        }
    })
}
