//! Site Setting Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Free-form key/value configuration row
///
/// Known keys: phone_primary, phone_secondary, whatsapp, email, address,
/// facebook, instagram, service_charge, gst. Writes go through
/// upsert semantics keyed on the unique `key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub key: String,
    pub value: String,
}
