//! Template step entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use testplan_core::error::CoreError;
use testplan_core::types::{DbId, StepOrder};
use testplan_core::validation::{or_empty, require_present};

/// A row from the `template_steps` table, projected to the fields returned
/// when loading a template. The parent `template_id` is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TemplateStep {
    pub id: DbId,
    pub step_order: StepOrder,
    pub section: String,
    pub step: String,
    pub procedure: String,
    pub day_time_duration: String,
    pub nq_duration: String,
    pub executor: String,
    pub comments: String,
}

/// One entry of the `steps` list in a save-template request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateStepPayload {
    pub step_order: Option<StepOrder>,
    pub section: Option<String>,
    pub step: Option<String>,
    pub procedure: Option<String>,
    pub day_time_duration: Option<String>,
    pub nq_duration: Option<String>,
    pub executor: Option<String>,
    pub comments: Option<String>,
}

/// Validated input for inserting a template step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateStep {
    pub step_order: StepOrder,
    pub section: String,
    pub step: String,
    pub procedure: String,
    pub day_time_duration: String,
    pub nq_duration: String,
    pub executor: String,
    pub comments: String,
}

impl TemplateStepPayload {
    /// `section` and `step` must be present; `step_order` defaults to 0.
    pub fn validate(self) -> Result<CreateTemplateStep, CoreError> {
        Ok(CreateTemplateStep {
            step_order: self.step_order.unwrap_or(0),
            section: require_present("section", self.section)?,
            step: require_present("step", self.step)?,
            procedure: or_empty(self.procedure),
            day_time_duration: or_empty(self.day_time_duration),
            nq_duration: or_empty(self.nq_duration),
            executor: or_empty(self.executor),
            comments: or_empty(self.comments),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn step_order_defaults_to_zero() {
        let payload: TemplateStepPayload =
            serde_json::from_str(r#"{"section": "Setup", "step": "Power On"}"#).unwrap();
        let input = payload.validate().unwrap();
        assert_eq!(input.step_order, 0);
        assert_eq!(input.procedure, "");
    }

    #[test]
    fn missing_step_label_is_rejected() {
        let payload: TemplateStepPayload =
            serde_json::from_str(r#"{"step_order": 1, "section": "Setup"}"#).unwrap();
        assert_matches!(
            payload.validate(),
            Err(CoreError::Validation(ref msg)) if msg == "step is required"
        );
    }

    #[test]
    fn non_integer_step_order_fails_to_decode() {
        let result: Result<TemplateStepPayload, _> =
            serde_json::from_str(r#"{"step_order": "first", "section": "S", "step": "X"}"#);
        assert!(result.is_err());
    }
}
