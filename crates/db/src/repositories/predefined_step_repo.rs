//! Repository for the `predefined_steps` table.

use sqlx::PgPool;
use testplan_core::types::DbId;

use crate::models::predefined_step::{CreatePredefinedStep, PredefinedStep};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, folder, section, procedure, day_time_duration, \
    nq_duration, executor, comments";

/// Provides create and list operations for predefined steps.
pub struct PredefinedStepRepo;

impl PredefinedStepRepo {
    /// Insert a new predefined step, returning its id.
    pub async fn create(pool: &PgPool, input: &CreatePredefinedStep) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO predefined_steps \
                (name, description, folder, section, procedure, day_time_duration, \
                 nq_duration, executor, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.folder)
        .bind(&input.section)
        .bind(&input.procedure)
        .bind(&input.day_time_duration)
        .bind(&input.nq_duration)
        .bind(&input.executor)
        .bind(&input.comments)
        .fetch_one(pool)
        .await
    }

    /// List every predefined step in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<PredefinedStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM predefined_steps ORDER BY id");
        sqlx::query_as::<_, PredefinedStep>(&query)
            .fetch_all(pool)
            .await
    }
}
