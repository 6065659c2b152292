//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an open transaction) as the first argument.

pub mod predefined_step_repo;
pub mod template_step_repo;
pub mod test_plan_template_repo;

pub use predefined_step_repo::PredefinedStepRepo;
pub use template_step_repo::TemplateStepRepo;
pub use test_plan_template_repo::TestPlanTemplateRepo;
