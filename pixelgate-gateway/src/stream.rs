//! Bridges the upstream event stream to downstream NDJSON frames.

use std::convert::Infallible;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use pixelgate_chunker::SentenceChunker;
use pixelgate_types::{ChatFrame, GenerateEvent};

/// Turn upstream events into newline-delimited [`ChatFrame`] bytes.
///
/// One chunker per call; deltas accumulate until a sentence (or
/// length-bounded fragment) is ready. The output ends after the upstream
/// `done` signal or after a single terminal error frame, whichever comes
/// first. A body that closes without `done` flushes the trailing partial
/// sentence the same way the done path does.
///
/// The item error type is [`Infallible`]: every failure is representable as
/// an in-band `{"error": ...}` frame, because by the time this stream runs
/// the response headers are already on the wire.
pub fn frame_stream(
    events: impl Stream<Item = GenerateEvent> + Send + 'static,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    async_stream::stream! {
        let mut chunker = SentenceChunker::new();
        let mut events = std::pin::pin!(events);

        while let Some(event) = events.next().await {
            match event {
                GenerateEvent::Delta(text) => {
                    for fragment in chunker.push(&text) {
                        yield Ok(Bytes::from(ChatFrame::chunk(fragment).to_line()));
                    }
                }
                GenerateEvent::Done => {
                    if let Some(rest) = chunker.finish() {
                        yield Ok(Bytes::from(ChatFrame::chunk(rest).to_line()));
                    }
                    return;
                }
                GenerateEvent::Failed(message) => {
                    tracing::warn!(error = %message, "upstream stream failed mid-response");
                    yield Ok(Bytes::from(ChatFrame::error(message).to_line()));
                    return;
                }
            }
        }

        if let Some(rest) = chunker.finish() {
            yield Ok(Bytes::from(ChatFrame::chunk(rest).to_line()));
        }
    }
}
