//! Subcategory Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Subcategory, SubcategoryCreate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "subcategory";

#[derive(Clone)]
pub struct SubcategoryRepository {
    base: BaseRepository,
}

impl SubcategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find active subcategories of a category, ordered by sort_order
    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Subcategory>> {
        let cat = record_id("category", category_id);
        let subcategories: Vec<Subcategory> = self
            .base
            .db()
            .query("SELECT * FROM subcategory WHERE category = $cat AND is_active = true ORDER BY sort_order ASC")
            .bind(("cat", cat))
            .await?
            .take(0)?;
        Ok(subcategories)
    }

    /// Find all subcategories regardless of is_active (management UIs)
    pub async fn find_all_admin(&self) -> RepoResult<Vec<Subcategory>> {
        let subcategories: Vec<Subcategory> = self
            .base
            .db()
            .query("SELECT * FROM subcategory ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(subcategories)
    }

    /// Find a subcategory by name within a category (case-insensitive)
    pub async fn find_by_name(
        &self,
        category_id: &RecordId,
        name: &str,
    ) -> RepoResult<Option<Subcategory>> {
        let name_folded = name.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM subcategory WHERE category = $cat AND string::lowercase(name) = $name LIMIT 1")
            .bind(("cat", category_id.clone()))
            .bind(("name", name_folded))
            .await?;
        let subcategories: Vec<Subcategory> = result.take(0)?;
        Ok(subcategories.into_iter().next())
    }

    /// Create a subcategory under an existing category, is_active forced to true
    pub async fn create(&self, data: SubcategoryCreate) -> RepoResult<Subcategory> {
        let cat = record_id("category", &data.category_id);

        // Referential check: owning category must exist
        let exists: Option<crate::db::models::Category> =
            self.base.db().select(cat.clone()).await?;
        if exists.is_none() {
            return Err(RepoError::Reference(format!(
                "Category {} not found",
                data.category_id
            )));
        }

        let subcategory = Subcategory {
            id: None,
            category: cat,
            name: data.name,
            sort_order: data.sort_order,
            is_active: true,
        };

        let created: Option<Subcategory> =
            self.base.db().create(TABLE).content(subcategory).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create subcategory".to_string()))
    }
}
