//! Status API DTOs
//!
//! Shape of the `homework_statuses` endpoint response.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Body of a successful status query
///
/// Only the container types are fixed here. Individual entries stay untyped
/// until one is selected, so a malformed entry that is never looked at
/// cannot fail the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Homeworks whose status changed since `from_date`, newest first
    pub homeworks: Vec<JsonValue>,

    /// Server time of the response, passed through as sent
    pub current_date: JsonValue,
}

impl ApiResponse {
    /// Most recent homework entry, if any
    pub fn latest(&self) -> Option<&JsonValue> {
        self.homeworks.first()
    }
}
