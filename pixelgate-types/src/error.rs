//! Upstream error taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while contacting the upstream generation service.
///
/// These cover the window before streaming begins; once the NDJSON stream is
/// open, failures surface as a terminal [`GenerateEvent::Failed`] instead.
///
/// [`GenerateEvent::Failed`]: crate::GenerateEvent::Failed
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connecting to or reading from the upstream timed out.
    #[error("upstream timed out after {0:?}")]
    Timeout(Duration),

    /// The upstream could not be reached.
    #[error("upstream network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The upstream does not have the requested model (HTTP 404).
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The upstream rejected the request (HTTP 400 or other non-success).
    #[error("invalid upstream request: {0}")]
    InvalidRequest(String),

    /// The upstream failed internally (HTTP 5xx).
    #[error("upstream unavailable: {0}")]
    ServiceUnavailable(String),
}

impl UpstreamError {
    /// Whether this error is a timeout.
    ///
    /// The gateway maps timeouts to 504 and every other upstream failure
    /// to 503.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
