use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The generation service could not be reached, timed out, or refused the call.
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// The generation service answered, but not in the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent => {
                AppError::MalformedResponse(err.to_string())
            }
            LlmError::Http(_) | LlmError::Timeout(_) | LlmError::Api { .. } => {
                AppError::Upstream(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The AI service is unavailable".to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed AI response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MALFORMED_RESPONSE",
                    "The AI service returned an unusable response".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_parse_failures_are_malformed_responses() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        assert!(matches!(
            AppError::from(LlmError::Parse(parse_err)),
            AppError::MalformedResponse(_)
        ));
        assert!(matches!(
            AppError::from(LlmError::EmptyContent),
            AppError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_transport_failures_are_upstream_errors() {
        assert!(matches!(
            AppError::from(LlmError::Timeout(Duration::from_secs(5))),
            AppError::Upstream(_)
        ));
        assert!(matches!(
            AppError::from(LlmError::Api {
                status: 503,
                message: "overloaded".to_string()
            }),
            AppError::Upstream(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Upstream("x".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::MalformedResponse("x".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
