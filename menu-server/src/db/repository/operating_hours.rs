//! Operating Hours Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::OperatingHours;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "operating_hours";

#[derive(Clone)]
pub struct OperatingHoursRepository {
    base: BaseRepository,
}

impl OperatingHoursRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// One row per weekday, Sunday first
    pub async fn find_all(&self) -> RepoResult<Vec<OperatingHours>> {
        let hours: Vec<OperatingHours> = self
            .base
            .db()
            .query("SELECT * FROM operating_hours ORDER BY day_of_week ASC")
            .await?
            .take(0)?;
        Ok(hours)
    }

    pub async fn create(&self, hours: OperatingHours) -> RepoResult<OperatingHours> {
        let created: Option<OperatingHours> =
            self.base.db().create(TABLE).content(hours).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create operating hours".to_string()))
    }
}
