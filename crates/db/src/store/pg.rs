use async_trait::async_trait;
use testplan_core::error::CoreError;
use testplan_core::types::DbId;

use crate::models::predefined_step::{CreatePredefinedStep, PredefinedStep};
use crate::models::test_plan_template::{CreateTestPlanTemplate, TemplateDetail, TestPlanTemplate};
use crate::repositories::{PredefinedStepRepo, TestPlanTemplateRepo};
use crate::store::TemplateStore;
use crate::DbPool;

/// [`TemplateStore`] backed by PostgreSQL through the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl TemplateStore for PgStore {
    async fn list_templates(&self) -> Result<Vec<TestPlanTemplate>, CoreError> {
        TestPlanTemplateRepo::list(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn load_template(&self, id: DbId) -> Result<Option<TemplateDetail>, CoreError> {
        TestPlanTemplateRepo::find_detail(&self.pool, id)
            .await
            .map_err(storage_error)
    }

    async fn create_template(&self, input: &CreateTestPlanTemplate) -> Result<DbId, CoreError> {
        TestPlanTemplateRepo::create(&self.pool, input)
            .await
            .map_err(storage_error)
    }

    async fn list_predefined_steps(&self) -> Result<Vec<PredefinedStep>, CoreError> {
        PredefinedStepRepo::list(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn create_predefined_step(&self, input: &CreatePredefinedStep) -> Result<DbId, CoreError> {
        PredefinedStepRepo::create(&self.pool, input)
            .await
            .map_err(storage_error)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }
}
