//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the projected database row
//! - A `Deserialize` payload with every field optional, as decoded from a
//!   request body
//! - A validated create DTO produced by the payload's `validate`

pub mod predefined_step;
pub mod template_step;
pub mod test_plan_template;
