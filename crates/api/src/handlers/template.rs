//! Handlers for the `/templates` resource.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use testplan_core::error::CoreError;
use testplan_core::types::DbId;
use testplan_db::models::test_plan_template::{TemplateDetail, TemplatePayload, TestPlanTemplate};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::SaveResponse;
use crate::state::AppState;

/// GET /templates
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TestPlanTemplate>>> {
    let templates = state.store.list_templates().await?;
    Ok(Json(templates))
}

/// GET /templates/{id}
///
/// Steps are sorted by `step_order`, then by insertion order.
pub async fn load(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<TemplateDetail>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let detail = state
        .store
        .load_template(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TestPlanTemplate",
            id,
        }))?;
    Ok(Json(detail))
}

/// POST /templates
///
/// Validates the template and every step, then persists them as one unit.
pub async fn save(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TemplatePayload>,
) -> AppResult<Json<SaveResponse>> {
    let input = payload.validate()?;
    let id = state
        .store
        .create_template(&input)
        .await
        .map_err(AppError::write_failed)?;

    tracing::info!(
        template_id = id,
        step_count = input.steps.len(),
        name = %input.name,
        "Test plan template saved",
    );

    Ok(Json(SaveResponse::success(id)))
}
