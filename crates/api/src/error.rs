use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use testplan_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders the `{"status": "error", "code", "message"}`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `testplan_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be decoded (malformed JSON, bad path id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A domain error raised by a store write. Storage failures render 400
    /// with the storage message.
    #[error(transparent)]
    WriteFailed(CoreError),

    /// A write endpoint was called with an unsupported method.
    #[error("Invalid request")]
    InvalidRequest,
}

impl AppError {
    /// Wrap an error returned by a store write.
    pub fn write_failed(err: CoreError) -> Self {
        AppError::WriteFailed(err)
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::WriteFailed(CoreError::Storage(msg)) => {
                tracing::error!(error = %msg, "Storage error during write");
                (StatusCode::BAD_REQUEST, "STORAGE_ERROR", msg.clone())
            }
            AppError::WriteFailed(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                "Invalid request".to_string(),
            ),
        };

        let body = json!({
            "status": "error",
            "code": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a [`CoreError`] into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404.
/// - `Validation` maps to 400 with its message.
/// - `Storage` maps to 500 with a sanitized message (read paths).
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Storage(msg) => {
            tracing::error!(error = %msg, "Storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "A storage error occurred".to_string(),
            )
        }
    }
}
