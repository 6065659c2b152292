//! Test plan template entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use testplan_core::error::CoreError;
use testplan_core::types::{DbId, Timestamp};
use testplan_core::validation::{at_index, or_empty, require_non_blank};

use crate::models::template_step::{CreateTemplateStep, TemplateStep, TemplateStepPayload};

/// A row from the `test_plan_templates` table. This is also the list
/// projection: `{id, name, description, folder, created_at}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TestPlanTemplate {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub folder: String,
    pub created_at: Timestamp,
}

/// A template joined with all of its steps, as returned by the load endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDetail {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub folder: String,
    pub steps: Vec<TemplateStep>,
}

impl TemplateDetail {
    pub fn new(template: TestPlanTemplate, steps: Vec<TemplateStep>) -> Self {
        Self {
            id: template.id,
            name: template.name,
            description: template.description,
            folder: template.folder,
            steps,
        }
    }
}

/// Request body for `POST /templates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
    /// Absent and `null` are both treated as an empty list.
    pub steps: Option<Vec<TemplateStepPayload>>,
}

/// Validated input for inserting a template together with its steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTestPlanTemplate {
    pub name: String,
    pub description: String,
    pub folder: String,
    /// Inserted in this order.
    pub steps: Vec<CreateTemplateStep>,
}

impl TemplatePayload {
    /// Validate the template and every step before anything is written.
    pub fn validate(self) -> Result<CreateTestPlanTemplate, CoreError> {
        let name = require_non_blank("name", self.name)?;
        let steps = self
            .steps
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, step)| step.validate().map_err(|e| at_index("steps", i, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreateTestPlanTemplate {
            name,
            description: or_empty(self.description),
            folder: or_empty(self.folder),
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn decode(body: &str) -> TemplatePayload {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn steps_default_to_empty() {
        let input = decode(r#"{"name": "Smoke Test"}"#).validate().unwrap();
        assert!(input.steps.is_empty());
        assert_eq!(input.description, "");
        assert_eq!(input.folder, "");
    }

    #[test]
    fn null_steps_are_empty() {
        let input = decode(r#"{"name": "Smoke Test", "steps": null}"#)
            .validate()
            .unwrap();
        assert!(input.steps.is_empty());
    }

    #[test]
    fn steps_keep_input_order() {
        let input = decode(
            r#"{"name": "T", "steps": [
                {"step_order": 2, "section": "A", "step": "second"},
                {"step_order": 1, "section": "A", "step": "first"}
            ]}"#,
        )
        .validate()
        .unwrap();
        let labels: Vec<_> = input.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(labels, vec!["second", "first"]);
    }

    #[test]
    fn invalid_step_reports_its_index() {
        let err = decode(
            r#"{"name": "T", "steps": [
                {"section": "A", "step": "ok"},
                {"step": "no section"}
            ]}"#,
        )
        .validate()
        .unwrap_err();
        assert_matches!(
            err,
            CoreError::Validation(ref msg) if msg == "steps[1]: section is required"
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_matches!(
            decode(r#"{"name": ""}"#).validate(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn detail_serializes_without_created_at() {
        let template = TestPlanTemplate {
            id: 3,
            name: "T".into(),
            description: String::new(),
            folder: "f".into(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(TemplateDetail::new(template, Vec::new())).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["description", "folder", "id", "name", "steps"]);
    }
}
