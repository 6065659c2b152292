//! Field-presence checks applied to decoded request payloads.
//!
//! Payload fields arrive as `Option<String>`; these helpers turn them into
//! the concrete values stored in the database, or a
//! [`CoreError::Validation`] naming the offending field.

use crate::error::CoreError;

/// Require a field to be present. An empty string is accepted.
pub fn require_present(field: &str, value: Option<String>) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Require a field to be present and contain something other than whitespace.
pub fn require_non_blank(field: &str, value: Option<String>) -> Result<String, CoreError> {
    let value = require_present(field, value)?;
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(value)
}

/// Optional text fields default to the empty string.
pub fn or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Prefix a validation message with the location of a nested entry,
/// e.g. `steps[2]: section is required`. Other errors pass through.
pub fn at_index(collection: &str, index: usize, err: CoreError) -> CoreError {
    match err {
        CoreError::Validation(msg) => CoreError::Validation(format!("{collection}[{index}]: {msg}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn present_value_passes_through() {
        let value = require_present("section", Some("Setup".to_string())).unwrap();
        assert_eq!(value, "Setup");
    }

    #[test]
    fn present_accepts_empty_string() {
        let value = require_present("section", Some(String::new())).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = require_present("section", None).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "section is required");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = require_non_blank("name", Some("   ".to_string())).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "name must not be blank");
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = require_non_blank("name", None).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "name is required");
    }

    #[test]
    fn non_blank_keeps_surrounding_whitespace() {
        let value = require_non_blank("name", Some(" Smoke ".to_string())).unwrap();
        assert_eq!(value, " Smoke ");
    }

    #[test]
    fn or_empty_defaults() {
        assert_eq!(or_empty(None), "");
        assert_eq!(or_empty(Some("x".to_string())), "x");
    }

    #[test]
    fn at_index_prefixes_validation_messages() {
        let err = at_index("steps", 2, CoreError::Validation("step is required".into()));
        assert_matches!(err, CoreError::Validation(ref msg) if msg == "steps[2]: step is required");
    }

    #[test]
    fn at_index_leaves_other_errors_alone() {
        let err = at_index("steps", 0, CoreError::Storage("down".into()));
        assert_matches!(err, CoreError::Storage(_));
    }
}
