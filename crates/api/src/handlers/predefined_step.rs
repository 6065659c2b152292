//! Handlers for the `/predefined-steps` resource.

use axum::extract::State;
use axum::Json;
use testplan_db::models::predefined_step::{PredefinedStep, PredefinedStepPayload};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::SaveResponse;
use crate::state::AppState;

/// GET /predefined-steps
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PredefinedStep>>> {
    let steps = state.store.list_predefined_steps().await?;
    Ok(Json(steps))
}

/// POST /predefined-steps
pub async fn save(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PredefinedStepPayload>,
) -> AppResult<Json<SaveResponse>> {
    let input = payload.validate()?;
    let id = state
        .store
        .create_predefined_step(&input)
        .await
        .map_err(AppError::write_failed)?;

    tracing::info!(predefined_step_id = id, name = %input.name, "Predefined step saved");

    Ok(Json(SaveResponse::success(id)))
}
