use async_trait::async_trait;
use testplan_core::error::CoreError;
use testplan_core::step_order::{sort_key, sort_steps};
use testplan_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::predefined_step::{CreatePredefinedStep, PredefinedStep};
use crate::models::template_step::{CreateTemplateStep, TemplateStep};
use crate::models::test_plan_template::{CreateTestPlanTemplate, TemplateDetail, TestPlanTemplate};
use crate::store::TemplateStore;

#[derive(Debug, Clone)]
struct StoredStep {
    template_id: DbId,
    step: TemplateStep,
}

#[derive(Debug, Default)]
struct Tables {
    templates: Vec<TestPlanTemplate>,
    steps: Vec<StoredStep>,
    predefined_steps: Vec<PredefinedStep>,
    next_id: DbId,
}

impl Tables {
    /// One id sequence shared by every table; only uniqueness matters.
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process [`TemplateStore`] with the same ordering and atomicity
/// guarantees as [`PgStore`](crate::store::PgStore).
///
/// A failure can be injected on the n-th step insert of a save to exercise
/// the rollback path, and the whole store can be marked unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_on_step: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every template save fails when it reaches step `index` (zero based).
    pub fn failing_on_step(index: usize) -> Self {
        Self {
            fail_on_step: Some(index),
            ..Self::default()
        }
    }

    /// Every operation fails with a storage error.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of step rows across all templates.
    pub async fn step_count(&self) -> usize {
        self.tables.read().await.steps.len()
    }

    fn check_available(&self) -> Result<(), CoreError> {
        if self.unavailable {
            return Err(CoreError::Storage("store unavailable".to_string()));
        }
        Ok(())
    }
}

fn stored_step(id: DbId, template_id: DbId, input: &CreateTemplateStep) -> StoredStep {
    StoredStep {
        template_id,
        step: TemplateStep {
            id,
            step_order: input.step_order,
            section: input.section.clone(),
            step: input.step.clone(),
            procedure: input.procedure.clone(),
            day_time_duration: input.day_time_duration.clone(),
            nq_duration: input.nq_duration.clone(),
            executor: input.executor.clone(),
            comments: input.comments.clone(),
        },
    }
}

#[async_trait]
impl TemplateStore for MemoryStore {
    async fn list_templates(&self) -> Result<Vec<TestPlanTemplate>, CoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.templates.clone())
    }

    async fn load_template(&self, id: DbId) -> Result<Option<TemplateDetail>, CoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let Some(template) = tables.templates.iter().find(|t| t.id == id) else {
            return Ok(None);
        };

        let mut steps: Vec<TemplateStep> = tables
            .steps
            .iter()
            .filter(|s| s.template_id == id)
            .map(|s| s.step.clone())
            .collect();
        sort_steps(&mut steps, |s| sort_key(s.step_order, s.id));

        Ok(Some(TemplateDetail::new(template.clone(), steps)))
    }

    async fn create_template(&self, input: &CreateTestPlanTemplate) -> Result<DbId, CoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;

        // Rows are staged and applied only once every step has succeeded.
        // Ids consumed by a failed save are not reused, as with a sequence.
        let template_id = tables.next_id();
        let mut staged = Vec::with_capacity(input.steps.len());
        for (index, step) in input.steps.iter().enumerate() {
            if self.fail_on_step == Some(index) {
                return Err(CoreError::Storage(format!(
                    "injected failure inserting step {index}"
                )));
            }
            let id = tables.next_id();
            staged.push(stored_step(id, template_id, step));
        }

        tables.templates.push(TestPlanTemplate {
            id: template_id,
            name: input.name.clone(),
            description: input.description.clone(),
            folder: input.folder.clone(),
            created_at: chrono::Utc::now(),
        });
        tables.steps.extend(staged);
        Ok(template_id)
    }

    async fn list_predefined_steps(&self) -> Result<Vec<PredefinedStep>, CoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.predefined_steps.clone())
    }

    async fn create_predefined_step(&self, input: &CreatePredefinedStep) -> Result<DbId, CoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let id = tables.next_id();
        tables.predefined_steps.push(PredefinedStep {
            id,
            name: input.name.clone(),
            folder: input.folder.clone(),
            section: input.section.clone(),
            procedure: input.procedure.clone(),
            day_time_duration: input.day_time_duration.clone(),
            nq_duration: input.nq_duration.clone(),
            executor: input.executor.clone(),
            comments: input.comments.clone(),
        });
        Ok(id)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        self.check_available()
    }
}
