pub mod health;
pub mod predefined_step;
pub mod template;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /templates                       list, save
/// /templates/{id}                  load
/// /predefined-steps                list, save
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", template::router())
        .nest("/predefined-steps", predefined_step::router())
}
