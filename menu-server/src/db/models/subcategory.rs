//! Subcategory Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type SubcategoryId = RecordId;

/// Subdivision within a single category
///
/// Only the richer categories subdivide; most have none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SubcategoryId>,
    /// Record link to the owning category
    pub category: RecordId,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryCreate {
    /// Owning category id ("category:xxx" or bare key)
    pub category_id: String,
    pub name: String,
    pub sort_order: i32,
}
