//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate, Subcategory};
use chrono::Utc;
use serde::Serialize;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All available items, unfiltered by category
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_available = true ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// All items regardless of is_available (management UIs)
    pub async fn find_all_admin(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Available items of one category
    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<MenuItem>> {
        let cat = record_id("category", category_id);
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE category = $cat AND is_available = true ORDER BY sort_order ASC")
            .bind(("cat", cat))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// All items of one category ordered by creation time, earliest first
    ///
    /// Used by the dedupe routine: the survivor of a duplicate-name group
    /// is the earliest-created record, regardless of store return order.
    pub async fn find_by_category_by_creation(
        &self,
        category_id: &RecordId,
    ) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE category = $cat ORDER BY created_at ASC, id ASC")
            .bind(("cat", category_id.clone()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Available items flagged for promotional display
    pub async fn find_featured(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_featured = true AND is_available = true ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Case-insensitive substring search over name and description,
    /// available items only
    pub async fn search(&self, query_text: &str) -> RepoResult<Vec<MenuItem>> {
        let q = query_text.to_lowercase();
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(
                "SELECT * FROM menu_item WHERE is_available = true \
                 AND (string::contains(string::lowercase(name), $q) \
                 OR string::contains(string::lowercase(description ?? ''), $q)) \
                 ORDER BY sort_order ASC",
            )
            .bind(("q", q))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let item: Option<MenuItem> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(item)
    }

    /// Resolve and referentially check a category/subcategory pair
    ///
    /// The subcategory, when given, must belong to the same category.
    async fn resolve_refs(
        &self,
        category_id: &str,
        subcategory_id: Option<&str>,
    ) -> RepoResult<(RecordId, Option<RecordId>)> {
        let cat = record_id("category", category_id);
        let exists: Option<crate::db::models::Category> =
            self.base.db().select(cat.clone()).await?;
        if exists.is_none() {
            return Err(RepoError::Reference(format!(
                "Category {} not found",
                category_id
            )));
        }

        let sub = match subcategory_id {
            Some(sub_id) => {
                let sub_rid = record_id("subcategory", sub_id);
                let sub_rec: Option<Subcategory> = self.base.db().select(sub_rid.clone()).await?;
                match sub_rec {
                    Some(rec) if rec.category == cat => Some(sub_rid),
                    Some(_) => {
                        return Err(RepoError::Reference(format!(
                            "Subcategory {} does not belong to category {}",
                            sub_id, category_id
                        )));
                    }
                    None => {
                        return Err(RepoError::Reference(format!(
                            "Subcategory {} not found",
                            sub_id
                        )));
                    }
                }
            }
            None => None,
        };

        Ok((cat, sub))
    }

    /// Create a menu item with forced defaults is_available = true, sort_order = 0
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let (category, subcategory) = self
            .resolve_refs(&data.category_id, data.subcategory_id.as_deref())
            .await?;

        let item = MenuItem {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            category,
            subcategory,
            image_url: data.image_url,
            is_vegetarian: data.is_vegetarian,
            is_spicy: data.is_spicy,
            is_available: true,
            is_featured: data.is_featured,
            sort_order: 0,
            created_at: Datetime::from(Utc::now()),
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Sparse patch: only Some fields are merged into the record
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        // Referential re-check when the category or subcategory changes.
        // A new subcategory must belong to the item's (possibly new) category.
        // Moving across categories without naming a subcategory drops the
        // stored link, which belongs to the old category.
        let mut clear_subcategory = false;
        let (category, subcategory) =
            match (data.category_id.as_deref(), data.subcategory_id.as_deref()) {
                (None, None) => (None, None),
                (Some(cat_id), None) => {
                    let (cat, _) = self.resolve_refs(cat_id, None).await?;
                    if cat != existing.category && existing.subcategory.is_some() {
                        clear_subcategory = true;
                    }
                    (Some(cat), None)
                }
                (cat_id, sub_id) => {
                    let effective_cat = match cat_id {
                        Some(c) => c.to_string(),
                        None => existing.category.to_string(),
                    };
                    let (cat, sub) = self.resolve_refs(&effective_cat, sub_id).await?;
                    (cat_id.map(|_| cat), sub)
                }
            };

        #[derive(Serialize)]
        struct MenuItemMerge {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<rust_decimal::Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<RecordId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            subcategory: Option<RecordId>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_vegetarian: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_spicy: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_featured: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
        }

        let merge = MenuItemMerge {
            name: data.name,
            description: data.description,
            price: data.price,
            category,
            subcategory,
            image_url: data.image_url,
            is_vegetarian: data.is_vegetarian,
            is_spicy: data.is_spicy,
            is_available: data.is_available,
            is_featured: data.is_featured,
            sort_order: data.sort_order,
        };

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $rid MERGE $data")
            .bind(("rid", rid.clone()))
            .bind(("data", merge))
            .await?;

        if clear_subcategory {
            self.base
                .db()
                .query("UPDATE $rid SET subcategory = NONE")
                .bind(("rid", rid))
                .await?;
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let deleted: Option<MenuItem> = self.base.db().delete(record_id(TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Menu item {} not found", id)));
        }
        Ok(())
    }
}
