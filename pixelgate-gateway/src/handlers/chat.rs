//! Streaming chat endpoint.

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use pixelgate_upstream::GenerateRequest;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::stream::frame_stream;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's question. Missing or blank is a 400.
    #[serde(default)]
    pub question: Option<String>,
}

/// `POST /api/chat`
///
/// Validates the question, opens the upstream stream, and hands the
/// connection over to [`frame_stream`]. Upstream failures here, before any
/// byte of the body has been written, still map to HTTP statuses (503/504);
/// later failures surface as an in-band `{"error"}` frame.
///
/// The rejection is taken explicitly so malformed JSON is a 400, not
/// axum's default 422.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let question = request.question.as_deref().map(str::trim).unwrap_or("");
    if question.is_empty() {
        return Err(ApiError::BadRequest("missing question".into()));
    }

    tracing::debug!(question_len = question.len(), "opening upstream generation stream");

    let generate = GenerateRequest {
        prompt: question.to_string(),
        max_tokens: state.max_tokens,
        temperature: state.temperature,
        model: None,
    };
    let events = state.upstream.generate_stream(&generate).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(frame_stream(events)))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
