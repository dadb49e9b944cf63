//! Table and Index Definitions
//!
//! Schema is applied idempotently at startup. Index choice mirrors the
//! query contracts: slug/key point lookups, category scoping, featured
//! flag, day-of-week ordering. Free-text search stays a full scan.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const DEFINITIONS: &str = "
    DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS category_slug ON TABLE category COLUMNS slug UNIQUE;
    DEFINE INDEX IF NOT EXISTS category_sort ON TABLE category COLUMNS sort_order;

    DEFINE TABLE IF NOT EXISTS subcategory SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS subcategory_category ON TABLE subcategory COLUMNS category;

    DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS menu_item_category ON TABLE menu_item COLUMNS category;
    DEFINE INDEX IF NOT EXISTS menu_item_subcategory ON TABLE menu_item COLUMNS subcategory;
    DEFINE INDEX IF NOT EXISTS menu_item_featured ON TABLE menu_item COLUMNS is_featured;

    DEFINE TABLE IF NOT EXISTS site_setting SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS site_setting_key ON TABLE site_setting COLUMNS key UNIQUE;

    DEFINE TABLE IF NOT EXISTS operating_hours SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS operating_hours_day ON TABLE operating_hours COLUMNS day_of_week;

    DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS;
";

/// Apply all table and index definitions
pub async fn define(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    db.query(DEFINITIONS).await?;
    Ok(())
}
