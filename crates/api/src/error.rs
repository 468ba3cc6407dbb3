use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use minutes_core::error::NoteError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`NoteError`] for use-case failures and adds a variant for requests
/// that could not be decoded at all. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A use-case error from `minutes_core`.
    #[error(transparent)]
    Note(#[from] NoteError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Note(err) => classify_note_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a [`NoteError`] to an HTTP status, error code, and message.
///
/// Storage failures are logged with their source and answered with a
/// sanitized message.
fn classify_note_error(err: &NoteError) -> (StatusCode, &'static str, String) {
    if !err.is_client_error() {
        let source = std::error::Error::source(err)
            .map(ToString::to_string)
            .unwrap_or_default();
        tracing::error!(error = %err, source = %source, "Storage error");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred".to_string(),
        );
    }

    match err {
        NoteError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        _ => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string()),
    }
}
