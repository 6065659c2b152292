//! Route definitions for the `/predefined-steps` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, predefined_step};
use crate::state::AppState;

/// Routes mounted at `/predefined-steps`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> save
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(predefined_step::list)
            .post(predefined_step::save)
            .fallback(handlers::invalid_request),
    )
}
