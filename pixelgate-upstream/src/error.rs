//! Internal helpers for mapping HTTP/reqwest errors to [`UpstreamError`].

use std::time::Duration;

use pixelgate_types::UpstreamError;

/// Map a non-success HTTP status from `/api/generate` to an [`UpstreamError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> UpstreamError {
    match status.as_u16() {
        404 => UpstreamError::ModelNotFound(body.to_string()),
        400 => UpstreamError::InvalidRequest(body.to_string()),
        500..=599 => UpstreamError::ServiceUnavailable(body.to_string()),
        _ => UpstreamError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map a [`reqwest::Error`] raised before streaming began.
///
/// `connect_timeout` is the client's configured bound, reported in the
/// timeout variant.
pub(crate) fn map_reqwest_error(err: reqwest::Error, connect_timeout: Duration) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::Timeout(connect_timeout)
    } else {
        UpstreamError::Network(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_maps_to_model_not_found() {
        let err = map_http_status(reqwest::StatusCode::NOT_FOUND, "model 'phi' not found");
        assert!(matches!(err, UpstreamError::ModelNotFound(msg) if msg == "model 'phi' not found"));
    }

    #[test]
    fn status_400_maps_to_invalid_request() {
        let err = map_http_status(reqwest::StatusCode::BAD_REQUEST, "bad body");
        assert!(matches!(err, UpstreamError::InvalidRequest(msg) if msg == "bad body"));
    }

    #[test]
    fn status_5xx_maps_to_service_unavailable() {
        for code in [500, 502, 503] {
            let status = reqwest::StatusCode::from_u16(code).expect("valid status");
            let err = map_http_status(status, "down");
            assert!(
                matches!(err, UpstreamError::ServiceUnavailable(_)),
                "expected ServiceUnavailable for {code}"
            );
        }
    }

    #[test]
    fn unknown_status_maps_to_invalid_request_with_status() {
        let err = map_http_status(reqwest::StatusCode::IM_A_TEAPOT, "teapot");
        match err {
            UpstreamError::InvalidRequest(msg) => {
                assert!(msg.contains("418"), "expected status in message: {msg}");
                assert!(msg.contains("teapot"), "expected body in message: {msg}");
            }
            other => panic!("expected InvalidRequest, got: {other:?}"),
        }
    }

    #[test]
    fn http_errors_are_never_timeouts() {
        let err = map_http_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, "busy");
        assert!(!err.is_timeout());
    }
}
