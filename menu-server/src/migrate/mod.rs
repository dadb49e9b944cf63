//! Batch Reconciliation Routines
//!
//! One-shot administrative procedures over the live catalog: subcategory
//! assignment with duplicate-name cleanup, featured marking, and bulk
//! menu seeding. All of them favor best-effort completion with counts
//! over aborting: unresolvable names are logged and skipped, never fatal.
//! Every routine is safely re-runnable.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;
use tracing::{info, warn};

use crate::db::models::{MenuItem, MenuItemUpdate, SubcategoryCreate};
use crate::db::repository::{
    CategoryRepository, MenuItemRepository, RepoError, RepoResult, SubcategoryRepository,
};
use crate::db::seed::SUBDIVIDED_CATEGORY_SLUG;

/// Prefix length for the fallback match in featured marking
const FEATURED_PREFIX_LEN: usize = 10;
/// Prefix length for the fallback match in subcategory assignment
const ASSIGN_PREFIX_LEN: usize = 8;

/// A subcategory name and the item names that belong under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubcategoryAssignment {
    pub subcategory_name: String,
    pub item_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub updated: usize,
    pub deleted: usize,
    pub total: usize,
}

/// Assign subcategory references by case-insensitive item name and
/// destroy duplicate items sharing a normalized name.
///
/// Candidates are walked in `created_at` order so the survivor of a
/// duplicate group is always the earliest-created record; re-running
/// the routine converges.
pub async fn assign_subcategories_and_dedupe(
    db: &Surreal<Db>,
    assignments: &[SubcategoryAssignment],
) -> RepoResult<ReconcileReport> {
    let categories = CategoryRepository::new(db.clone());
    let subcategories = SubcategoryRepository::new(db.clone());
    let items_repo = MenuItemRepository::new(db.clone());

    // Hard fail if the target category is missing
    let category = categories
        .find_by_slug(SUBDIVIDED_CATEGORY_SLUG)
        .await?
        .ok_or_else(|| {
            RepoError::NotFound(format!("Category {} not found", SUBDIVIDED_CATEGORY_SLUG))
        })?;
    let category_id = category
        .id
        .ok_or_else(|| RepoError::Database("Category record without id".to_string()))?;

    // Case-folded item name -> subcategory id
    let mut targets: HashMap<String, String> = HashMap::new();
    for assignment in assignments {
        let sub = subcategories
            .find_by_name(&category_id, &assignment.subcategory_name)
            .await?;
        match sub.and_then(|s| s.id) {
            Some(sub_id) => {
                for item_name in &assignment.item_names {
                    targets.insert(item_name.to_lowercase(), sub_id.to_string());
                }
            }
            None => {
                warn!(
                    "Subcategory '{}' not found, skipping {} item assignments",
                    assignment.subcategory_name,
                    assignment.item_names.len()
                );
            }
        }
    }

    let items = items_repo.find_by_category_by_creation(&category_id).await?;
    let total = items.len();

    let mut seen: HashSet<String> = HashSet::new();
    let mut updated = 0;
    let mut deleted = 0;

    for item in items {
        let Some(item_id) = item.id else { continue };
        let folded = item.name.to_lowercase();

        if !seen.insert(folded.clone()) {
            // Later duplicate of an already-kept name
            items_repo.delete(&item_id.to_string()).await?;
            info!("Deleted duplicate item '{}'", item.name);
            deleted += 1;
            continue;
        }

        if let Some(sub_id) = targets.get(&folded) {
            items_repo
                .update(
                    &item_id.to_string(),
                    MenuItemUpdate {
                        subcategory_id: Some(sub_id.clone()),
                        ..Default::default()
                    },
                )
                .await?;
            updated += 1;
        }
    }

    Ok(ReconcileReport {
        updated,
        deleted,
        total,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedReport {
    pub marked: usize,
    pub skipped: usize,
}

/// Mark items as featured by name, exact case-insensitive match first,
/// then a prefix fallback. Misses are logged and counted as skipped.
pub async fn mark_featured(db: &Surreal<Db>, names: &[String]) -> RepoResult<FeaturedReport> {
    let items_repo = MenuItemRepository::new(db.clone());
    let items = items_repo.find_all().await?;

    let mut marked = 0;
    let mut skipped = 0;

    for name in names {
        let folded = name.to_lowercase();
        let found = items
            .iter()
            .find(|i| i.name.to_lowercase() == folded)
            .or_else(|| {
                let prefix: String = folded.chars().take(FEATURED_PREFIX_LEN).collect();
                items.iter().find(|i| i.name.to_lowercase().contains(&prefix))
            });

        match found.and_then(|i| i.id.clone()) {
            Some(item_id) => {
                items_repo
                    .update(
                        &item_id.to_string(),
                        MenuItemUpdate {
                            is_featured: Some(true),
                            ..Default::default()
                        },
                    )
                    .await?;
                marked += 1;
            }
            None => {
                warn!("Featured candidate not found: {}", name);
                skipped += 1;
            }
        }
    }

    Ok(FeaturedReport { marked, skipped })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignReport {
    pub subcategories_created: usize,
    pub assigned: usize,
    pub missed: usize,
}

/// Create subcategories under a category and assign listed items to
/// them by name, exact match first, then a prefix fallback.
pub async fn assign_by_name(
    db: &Surreal<Db>,
    category_slug: &str,
    assignments: &[SubcategoryAssignment],
) -> RepoResult<AssignReport> {
    let categories = CategoryRepository::new(db.clone());
    let subcategories = SubcategoryRepository::new(db.clone());
    let items_repo = MenuItemRepository::new(db.clone());

    let category = categories
        .find_by_slug(category_slug)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", category_slug)))?;
    let category_id = category
        .id
        .ok_or_else(|| RepoError::Database("Category record without id".to_string()))?;

    let items = items_repo.find_by_category_by_creation(&category_id).await?;

    let mut subcategories_created = 0;
    let mut assigned = 0;
    let mut missed = 0;

    for (i, assignment) in assignments.iter().enumerate() {
        // Reuse an existing subcategory on re-runs
        let existing = subcategories
            .find_by_name(&category_id, &assignment.subcategory_name)
            .await?;
        let sub_id = match existing.and_then(|s| s.id) {
            Some(id) => id,
            None => {
                let created = subcategories
                    .create(SubcategoryCreate {
                        category_id: category_id.to_string(),
                        name: assignment.subcategory_name.clone(),
                        sort_order: (i + 1) as i32,
                    })
                    .await?;
                subcategories_created += 1;
                created
                    .id
                    .ok_or_else(|| RepoError::Database("Subcategory record without id".to_string()))?
            }
        };

        for name in &assignment.item_names {
            let folded = name.to_lowercase();
            let found = items
                .iter()
                .find(|i| i.name.to_lowercase() == folded)
                .or_else(|| {
                    let prefix: String = folded.chars().take(ASSIGN_PREFIX_LEN).collect();
                    items.iter().find(|i| i.name.to_lowercase().contains(&prefix))
                });

            match found.and_then(|i| i.id.clone()) {
                Some(item_id) => {
                    items_repo
                        .update(
                            &item_id.to_string(),
                            MenuItemUpdate {
                                subcategory_id: Some(sub_id.to_string()),
                                ..Default::default()
                            },
                        )
                        .await?;
                    assigned += 1;
                }
                None => {
                    warn!("Item not found for assignment: {}", name);
                    missed += 1;
                }
            }
        }
    }

    Ok(AssignReport {
        subcategories_created,
        assigned,
        missed,
    })
}

/// One raw row of the bulk menu seed
///
/// Vegetarian/spicy flags may be omitted and are then inferred from the
/// item name the way the original menu data was structured: "(veg)" and
/// "spicy" substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_slug: String,
    pub image_url: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_spicy: Option<bool>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchInsertReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Bulk insert, resolving each item's category by slug. Items whose
/// slug does not resolve are logged and excluded from the count.
pub async fn insert_menu_items_batch(
    db: &Surreal<Db>,
    items: &[BatchMenuItem],
) -> RepoResult<BatchInsertReport> {
    let categories = CategoryRepository::new(db.clone());

    // Slug -> category id, one scan up front
    let mut cat_map: HashMap<String, surrealdb::RecordId> = HashMap::new();
    for category in categories.find_all_admin().await? {
        if let Some(id) = category.id {
            cat_map.insert(category.slug, id);
        }
    }

    let mut inserted = 0;
    let mut skipped = 0;

    for item in items {
        let Some(category) = cat_map.get(&item.category_slug) else {
            warn!(
                "Skipping {}: unknown category {}",
                item.name, item.category_slug
            );
            skipped += 1;
            continue;
        };

        let folded = item.name.to_lowercase();
        let is_vegetarian = item.is_vegetarian.unwrap_or_else(|| folded.contains("(veg)"));
        let is_spicy = item.is_spicy.unwrap_or_else(|| folded.contains("spicy"));
        // Placeholder logo images carry no information
        let image_url = item
            .image_url
            .clone()
            .filter(|url| !url.contains("logo.png"));

        let record = MenuItem {
            id: None,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: category.clone(),
            subcategory: None,
            image_url,
            is_vegetarian,
            is_spicy,
            is_available: true,
            is_featured: false,
            sort_order: item.sort_order,
            created_at: Datetime::from(Utc::now()),
        };

        let created: Option<MenuItem> = db.create("menu_item").content(record).await?;
        if created.is_some() {
            inserted += 1;
        } else {
            warn!("Insert returned no record for {}", item.name);
            skipped += 1;
        }
    }

    Ok(BatchInsertReport { inserted, skipped })
}
