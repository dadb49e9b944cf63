//! Operating Hours Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// One row per weekday, 0 = Sunday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub day_of_week: i32,
    pub open_time: String,
    pub close_time: String,
    pub is_closed: bool,
    pub label: String,
}
