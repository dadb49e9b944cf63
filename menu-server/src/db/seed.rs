//! One-time Structural Seeding
//!
//! Creates the baseline catalog structure: categories, the Levant
//! Flavours subcategories, site settings and operating hours. Guarded
//! against re-execution: if any category exists, nothing is written.

use std::collections::HashMap;

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::info;

use crate::db::models::{CategoryCreate, OperatingHours, SubcategoryCreate};
use crate::db::repository::{
    CategoryRepository, OperatingHoursRepository, RepoResult, SiteSettingRepository,
    SubcategoryRepository,
};

/// Category slug that subdivides into subcategories
pub const SUBDIVIDED_CATEGORY_SLUG: &str = "levant_flavours";

pub const CATEGORIES: &[(&str, &str, i32)] = &[
    ("levant_flavours", "Levant Flavours", 1),
    ("all_day_eats", "All Day Eats", 2),
    ("thirsty", "Thirsty", 3),
    ("sweet_endings", "Sweet Endings", 4),
    ("high_tea", "High Tea", 5),
];

pub const SUBCATEGORIES: &[&str] = &[
    "Breakfast",
    "Cold Mezze",
    "Hot Mezze",
    "Salads",
    "Soup",
    "Shawarmas & Wraps",
    "From the Grill",
    "Oriental Dishes",
    "Sawani",
    "Advance Order",
    "Sides",
];

pub const SETTINGS: &[(&str, &str)] = &[
    ("phone_primary", "+960 778 2460"),
    ("phone_secondary", "+960 335 0505"),
    ("whatsapp", "9607782460"),
    ("email", "info@lazeez.mv"),
    ("address", "H. Thiyara, Male' 20081, Maldives"),
    ("facebook", "https://facebook.com/lazeezgourmet"),
    ("instagram", "https://instagram.com/lazeezgourmet/"),
    ("service_charge", "10"),
    ("gst", "8"),
];

pub const HOURS: &[(i32, &str, &str, bool, &str)] = &[
    (0, "12:00", "00:00", false, "Sunday"),
    (1, "12:00", "00:00", false, "Monday"),
    (2, "12:00", "00:00", false, "Tuesday"),
    (3, "12:00", "00:00", false, "Wednesday"),
    (4, "12:00", "00:00", false, "Thursday"),
    (5, "15:00", "00:00", false, "Friday"),
    (6, "12:00", "00:00", false, "Saturday"),
];

/// Seed result, serialized as { "status": "..." }
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    AlreadySeeded,
    Seeded {
        /// slug -> created record id
        category_ids: HashMap<String, String>,
    },
}

/// Idempotent structural seed
pub async fn seed_structure(db: &Surreal<Db>) -> RepoResult<SeedOutcome> {
    let categories = CategoryRepository::new(db.clone());
    if categories.any_exists().await? {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let mut category_ids: HashMap<String, String> = HashMap::new();
    for (slug, label, sort_order) in CATEGORIES {
        let created = categories
            .create(CategoryCreate {
                slug: slug.to_string(),
                label: label.to_string(),
                sort_order: *sort_order,
            })
            .await?;
        if let Some(id) = created.id {
            category_ids.insert(slug.to_string(), id.to_string());
        }
    }

    // Subcategories live under the one subdivided category
    let subcategories = SubcategoryRepository::new(db.clone());
    if let Some(levant_id) = category_ids.get(SUBDIVIDED_CATEGORY_SLUG) {
        for (i, name) in SUBCATEGORIES.iter().enumerate() {
            subcategories
                .create(SubcategoryCreate {
                    category_id: levant_id.clone(),
                    name: name.to_string(),
                    sort_order: (i + 1) as i32,
                })
                .await?;
        }
    }

    let settings = SiteSettingRepository::new(db.clone());
    for (key, value) in SETTINGS {
        settings.upsert(key, value).await?;
    }

    let hours = OperatingHoursRepository::new(db.clone());
    for (day_of_week, open_time, close_time, is_closed, label) in HOURS {
        hours
            .create(OperatingHours {
                id: None,
                day_of_week: *day_of_week,
                open_time: open_time.to_string(),
                close_time: close_time.to_string(),
                is_closed: *is_closed,
                label: label.to_string(),
            })
            .await?;
    }

    info!(
        "Seeded {} categories, {} subcategories, {} settings, {} hour rows",
        CATEGORIES.len(),
        SUBCATEGORIES.len(),
        SETTINGS.len(),
        HOURS.len()
    );

    Ok(SeedOutcome::Seeded { category_ids })
}
