//! `/api/generate` request and response line types.

use serde::{Deserialize, Serialize};

/// Parameters for one streaming generation call.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The user's question, passed through as the prompt.
    pub prompt: String,
    /// Generation budget in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Model override; the client default is used when `None`.
    pub model: Option<String>,
}

/// Wire body for POST `/api/generate`.
#[derive(Debug, Serialize)]
pub(crate) struct ApiRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub stream: bool,
    pub temperature: f64,
}

/// One decoded NDJSON line of the streaming response.
///
/// Both fields are optional on the wire; absent fields default so that a
/// bare `{}` line decodes to an empty, ignorable chunk.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
}
