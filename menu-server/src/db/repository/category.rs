//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all active categories ordered by sort_order
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category WHERE is_active = true ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find all categories regardless of is_active (management UIs)
    pub async fn find_all_admin(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY sort_order ASC")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let category: Option<Category> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(category)
    }

    /// Find category by slug (stable external key)
    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        let slug_owned = slug.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug_owned))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Whether any category exists at all (seed guard)
    pub async fn any_exists(&self) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category LIMIT 1")
            .await?;
        let found: Vec<Category> = result.take(0)?;
        Ok(!found.is_empty())
    }

    /// Create a new category, is_active forced to true
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        // Unique slug
        if self.find_by_slug(&data.slug).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.slug
            )));
        }

        let category = Category {
            id: None,
            slug: data.slug,
            label: data.label,
            sort_order: data.sort_order,
            is_active: true,
        };

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Sparse patch: only Some fields are merged into the record
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let rid = record_id(TABLE, id);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $rid MERGE $data")
            .bind(("rid", rid.clone()))
            .bind(("data", data))
            .await?;

        // Fetch the updated record
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }
}
