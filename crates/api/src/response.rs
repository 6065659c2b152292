//! Response envelope for write endpoints.

use serde::Serialize;
use testplan_core::types::DbId;

/// `{ "status": "success", "id": N }`, returned by every successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub id: DbId,
}

impl SaveResponse {
    pub fn success(id: DbId) -> Self {
        Self {
            status: "success",
            id,
        }
    }
}
