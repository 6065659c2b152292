//! Predefined step entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use testplan_core::error::CoreError;
use testplan_core::types::DbId;
use testplan_core::validation::{or_empty, require_non_blank, require_present};

/// A row from the `predefined_steps` table, projected to the listed fields.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PredefinedStep {
    pub id: DbId,
    pub name: String,
    pub folder: String,
    pub section: String,
    pub procedure: String,
    pub day_time_duration: String,
    pub nq_duration: String,
    pub executor: String,
    pub comments: String,
}

/// Request body for `POST /predefined-steps`.
///
/// Every field is optional at decode time so that a missing `name` or
/// `section` surfaces as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredefinedStepPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
    pub section: Option<String>,
    pub procedure: Option<String>,
    pub day_time_duration: Option<String>,
    pub nq_duration: Option<String>,
    pub executor: Option<String>,
    pub comments: Option<String>,
}

/// Validated input for inserting a predefined step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePredefinedStep {
    pub name: String,
    /// Stored but not part of the list projection.
    pub description: String,
    pub folder: String,
    pub section: String,
    pub procedure: String,
    pub day_time_duration: String,
    pub nq_duration: String,
    pub executor: String,
    pub comments: String,
}

impl PredefinedStepPayload {
    /// Enforce `name` (non-blank) and `section` (present); default the rest
    /// to empty strings.
    pub fn validate(self) -> Result<CreatePredefinedStep, CoreError> {
        Ok(CreatePredefinedStep {
            name: require_non_blank("name", self.name)?,
            section: require_present("section", self.section)?,
            description: or_empty(self.description),
            folder: or_empty(self.folder),
            procedure: or_empty(self.procedure),
            day_time_duration: or_empty(self.day_time_duration),
            nq_duration: or_empty(self.nq_duration),
            executor: or_empty(self.executor),
            comments: or_empty(self.comments),
        })
    }
}
