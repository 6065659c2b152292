//! The persistence interface injected into HTTP handlers.
//!
//! [`TemplateStore`] is the seam between the API layer and storage:
//! production wires in [`PgStore`], tests use [`MemoryStore`]. Every method
//! reports failures as [`CoreError`] so callers never see backend types.

mod memory;
mod pg;

use async_trait::async_trait;
use testplan_core::error::CoreError;
use testplan_core::types::DbId;

use crate::models::predefined_step::{CreatePredefinedStep, PredefinedStep};
use crate::models::test_plan_template::{CreateTestPlanTemplate, TemplateDetail, TestPlanTemplate};

pub use memory::MemoryStore;
pub use pg::PgStore;

#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// All templates, in insertion order.
    async fn list_templates(&self) -> Result<Vec<TestPlanTemplate>, CoreError>;

    /// One template with its steps sorted by `(step_order, id)`, or `None`.
    async fn load_template(&self, id: DbId) -> Result<Option<TemplateDetail>, CoreError>;

    /// Persist a template and its steps atomically, returning the template id.
    async fn create_template(&self, input: &CreateTestPlanTemplate) -> Result<DbId, CoreError>;

    /// All predefined steps, in insertion order.
    async fn list_predefined_steps(&self) -> Result<Vec<PredefinedStep>, CoreError>;

    /// Persist one predefined step, returning its id.
    async fn create_predefined_step(&self, input: &CreatePredefinedStep) -> Result<DbId, CoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}
