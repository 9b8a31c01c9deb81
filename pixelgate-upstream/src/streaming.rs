//! NDJSON streaming support for `/api/generate`.
//!
//! The upstream emits one JSON object per line:
//! ```text
//! {"response":"Hel","done":false}
//! {"response":"lo.","done":false}
//! {"response":"","done":true}
//! ```
//! Network chunks align with neither line boundaries nor UTF-8 character
//! boundaries, so raw bytes are buffered across chunks and decoded one line
//! at a time. Lines that fail to decode are skipped; a transport failure ends
//! the stream with a terminal [`GenerateEvent::Failed`].

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::BytesMut;
use futures::{Stream, StreamExt};
use pixelgate_types::GenerateEvent;
use reqwest::Response;

use crate::types::ApiChunk;

/// The event stream for one generation request.
pub struct GenerateStream {
    receiver: Pin<Box<dyn Stream<Item = GenerateEvent> + Send>>,
}

impl std::fmt::Debug for GenerateStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateStream").finish_non_exhaustive()
    }
}

impl Stream for GenerateStream {
    type Item = GenerateEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.as_mut().poll_next(cx)
    }
}

/// Wrap an HTTP response body into a [`GenerateStream`].
pub(crate) fn stream_generation(response: Response) -> GenerateStream {
    GenerateStream {
        receiver: Box::pin(parse_ndjson_stream(response.bytes_stream())),
    }
}

/// Parse a raw byte stream into [`GenerateEvent`]s.
///
/// The stream ends after the first `done: true` line, after a terminal
/// failure, or when the underlying byte stream closes.
fn parse_ndjson_stream<E: std::fmt::Display + Send + 'static>(
    byte_stream: impl Stream<Item = Result<bytes::Bytes, E>> + Send + 'static,
) -> impl Stream<Item = GenerateEvent> + Send + 'static {
    async_stream::stream! {
        let mut bytes_stream = std::pin::pin!(byte_stream);
        // Raw bytes, not a String: a chunk boundary can land inside a
        // multi-byte character, so UTF-8 is only decoded per extracted line.
        let mut line_buf = BytesMut::new();

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield GenerateEvent::Failed(format!("stream read error: {e}"));
                    return;
                }
            };

            line_buf.extend_from_slice(&chunk);

            while let Some(newline_pos) = line_buf.iter().position(|&b| b == b'\n') {
                let line_bytes = line_buf.split_to(newline_pos + 1);

                for event in decode_line(&line_bytes[..newline_pos]) {
                    let done = matches!(event, GenerateEvent::Done);
                    yield event;
                    if done {
                        return;
                    }
                }
            }
        }

        // The body closed mid-line; the trailing fragment may still be a
        // complete JSON object.
        if !line_buf.is_empty() {
            for event in decode_line(&line_buf) {
                let done = matches!(event, GenerateEvent::Done);
                yield event;
                if done {
                    return;
                }
            }
        }
    }
}

/// Decode one raw line into events. Lines that are not valid UTF-8 are
/// skipped like any other undecodable line.
fn decode_line(raw: &[u8]) -> Vec<GenerateEvent> {
    let line = match std::str::from_utf8(raw) {
        Ok(s) => s.trim_end_matches('\r'),
        Err(e) => {
            tracing::debug!(error = %e, "skipping non-UTF-8 NDJSON line");
            return Vec::new();
        }
    };
    if line.trim().is_empty() {
        return Vec::new();
    }
    parse_line(line)
}

/// Decode one NDJSON line into zero, one, or two events.
///
/// A line carrying both text and `done: true` yields the delta first so no
/// generated bytes are lost. Undecodable lines yield nothing.
fn parse_line(line: &str) -> Vec<GenerateEvent> {
    let chunk: ApiChunk = match serde_json::from_str(line) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "skipping undecodable NDJSON line");
            return Vec::new();
        }
    };

    let mut events = Vec::new();
    if !chunk.response.is_empty() {
        events.push(GenerateEvent::Delta(chunk.response));
    }
    if chunk.done {
        events.push(GenerateEvent::Done);
    }
    events
}

// ─── Tests ───────────────────────────────────────────────────────────────────
