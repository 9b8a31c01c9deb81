//! Output frames for the downstream NDJSON stream.

use serde::{Deserialize, Serialize};

/// One frame of the downstream response stream.
///
/// Serializes as `{"chunk": <text>}` or `{"error": <message>}`, one JSON
/// object per line. A stream carries any number of `chunk` frames followed by
/// at most one `error` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatFrame {
    /// A complete sentence or length-bounded fragment of the answer.
    Chunk(String),
    /// A terminal error. The stream ends after this frame.
    Error(String),
}

impl ChatFrame {
    /// Build a `chunk` frame.
    pub fn chunk(text: impl Into<String>) -> Self {
        Self::Chunk(text.into())
    }

    /// Build an `error` frame.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Serialize this frame as one newline-terminated JSON line.
    pub fn to_line(&self) -> String {
        let value = match self {
            Self::Chunk(text) => serde_json::json!({ "chunk": text }),
            Self::Error(message) => serde_json::json!({ "error": message }),
        };
        let mut line = value.to_string();
        line.push('\n');
        line
    }
}
