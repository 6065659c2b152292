//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers decode and validate the request, delegate to the injected
//! [`TemplateStore`](testplan_db::store::TemplateStore) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod predefined_step;
pub mod template;

use crate::error::AppError;

/// Method fallback for write endpoints.
pub async fn invalid_request() -> AppError {
    AppError::InvalidRequest
}
