//! Route definitions for the `/templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, template};
use crate::state::AppState;

/// Routes mounted at `/templates`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> save
/// GET    /{id}    -> load
/// ```
///
/// Any other method on `/` answers 400 "Invalid request".
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(template::list)
                .post(template::save)
                .fallback(handlers::invalid_request),
        )
        .route("/{id}", get(template::load))
}
