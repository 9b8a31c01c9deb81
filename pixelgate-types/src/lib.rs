#![deny(missing_docs)]
//! Shared types for the pixelgate chat gateway.
//!
//! The gateway sits between an API client and a locally hosted text-generation
//! service. This crate holds the types that cross crate boundaries: the
//! newline-delimited JSON frames sent to the client, the events decoded from
//! the upstream stream, and the upstream error taxonomy.

mod error;
mod frame;

pub use error::UpstreamError;
pub use frame::ChatFrame;

/// An event decoded from the upstream generation stream.
///
/// One upstream NDJSON line yields zero, one, or two events: a [`Delta`] for a
/// non-empty `response` field and a [`Done`] for `done: true`. Lines that fail
/// to decode yield nothing. A transport failure mid-stream yields a terminal
/// [`Failed`].
///
/// [`Delta`]: GenerateEvent::Delta
/// [`Done`]: GenerateEvent::Done
/// [`Failed`]: GenerateEvent::Failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// A fragment of generated text.
    Delta(String),
    /// The upstream marked the response complete. No events follow.
    Done,
    /// Reading the upstream stream failed. No events follow.
    Failed(String),
}
