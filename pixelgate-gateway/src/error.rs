//! API error types and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixelgate_types::UpstreamError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced as HTTP statuses.
///
/// These only apply before streaming begins; once the response body is open,
/// failures become a terminal `{"error": ...}` frame instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was missing, malformed, or had no question.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The upstream generation service failed before streaming began.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Upstream(err) if err.is_timeout() => {
                (StatusCode::GATEWAY_TIMEOUT, "upstream_timeout")
            }
            ApiError::Upstream(_) => (StatusCode::SERVICE_UNAVAILABLE, "upstream_unavailable"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
