//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB catalog tables.

// Catalog
pub mod category;
pub mod menu_item;
pub mod subcategory;

// Restaurant info
pub mod operating_hours;
pub mod site_setting;

// Customer interactions
pub mod reservation;

// Re-exports
pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use operating_hours::OperatingHoursRepository;
pub use reservation::ReservationRepository;
pub use site_setting::SiteSettingRepository;
pub use subcategory::SubcategoryRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid reference: {0}")]
    Reference(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" 格式, surrealdb::RecordId 处理所有 ID
//   - 解析: let id: RecordId = "category:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("category", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
// =============================================================================

/// Parse an id that may or may not carry the table prefix
pub fn record_id(table: &str, id: &str) -> RecordId {
    match id.parse::<RecordId>() {
        Ok(rid) if rid.table() == table => rid,
        _ => RecordId::from_table_key(table, id),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests;
