use std::sync::Arc;

use testplan_db::store::TemplateStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn TemplateStore>,
}
