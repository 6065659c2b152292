//! Repository for the `template_steps` table.

use sqlx::PgPool;
use testplan_core::types::DbId;

use crate::models::template_step::{CreateTemplateStep, TemplateStep};

const COLUMNS: &str = "id, step_order, section, step, procedure, day_time_duration, \
    nq_duration, executor, comments";

/// Steps are only ever written as part of their parent template's
/// transaction, so there is no pool-level insert.
pub struct TemplateStepRepo;

impl TemplateStepRepo {
    /// Insert `steps` for `template_id` in the given order, returning the new ids.
    pub async fn create_all(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        template_id: DbId,
        steps: &[CreateTemplateStep],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut ids = Vec::with_capacity(steps.len());
        for step in steps {
            let id = sqlx::query_scalar::<_, DbId>(
                "INSERT INTO template_steps \
                    (template_id, step_order, section, step, procedure, day_time_duration, \
                     nq_duration, executor, comments) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                 RETURNING id",
            )
            .bind(template_id)
            .bind(step.step_order)
            .bind(&step.section)
            .bind(&step.step)
            .bind(&step.procedure)
            .bind(&step.day_time_duration)
            .bind(&step.nq_duration)
            .bind(&step.executor)
            .bind(&step.comments)
            .fetch_one(&mut **tx)
            .await?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// List the steps of a template by `step_order`, then insertion order.
    pub async fn list_by_template(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TemplateStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM template_steps \
             WHERE template_id = $1 \
             ORDER BY step_order, id"
        );
        sqlx::query_as::<_, TemplateStep>(&query)
            .bind(template_id)
            .fetch_all(pool)
            .await
    }
}
