//! Shared domain types for the test plan templates service.
//!
//! Pure types and functions only: no I/O, no database, no HTTP. Both the
//! storage layer and the API layer depend on this crate.

pub mod error;
pub mod step_order;
pub mod types;
pub mod validation;
