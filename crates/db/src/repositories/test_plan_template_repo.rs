//! Repository for the `test_plan_templates` table.

use sqlx::PgPool;
use testplan_core::types::DbId;

use crate::models::test_plan_template::{CreateTestPlanTemplate, TemplateDetail, TestPlanTemplate};
use crate::repositories::TemplateStepRepo;

const COLUMNS: &str = "id, name, description, folder, created_at";

/// Provides create, list and load operations for templates.
pub struct TestPlanTemplateRepo;

impl TestPlanTemplateRepo {
    /// Insert a template and all of its steps in one transaction, returning
    /// the template id.
    ///
    /// Nothing is persisted unless every step insert succeeds.
    pub async fn create(pool: &PgPool, input: &CreateTestPlanTemplate) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO test_plan_templates (name, description, folder) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.folder)
        .fetch_one(&mut *tx)
        .await?;

        TemplateStepRepo::create_all(&mut tx, id, &input.steps).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Find a template by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TestPlanTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_plan_templates WHERE id = $1");
        sqlx::query_as::<_, TestPlanTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a template by id, joined with its ordered steps.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<TemplateDetail>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(template) => {
                let steps = TemplateStepRepo::list_by_template(pool, template.id).await?;
                Ok(Some(TemplateDetail::new(template, steps)))
            }
            None => Ok(None),
        }
    }

    /// List every template in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TestPlanTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM test_plan_templates ORDER BY id");
        sqlx::query_as::<_, TestPlanTemplate>(&query)
            .fetch_all(pool)
            .await
    }
}
