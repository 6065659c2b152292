//! Request extractors producing [`AppError`] rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body, parsed regardless of the `Content-Type` header.
///
/// The body must be a JSON object. Unlike `axum::Json`, a rejection renders
/// the standard error envelope with the parser's message, always as 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        // serde accepts a JSON array for a struct, filling fields by position.
        if !value.is_object() {
            return Err(AppError::BadRequest(
                "request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|err| AppError::BadRequest(err.to_string()))
    }
}
