//! Site Setting Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SiteSetting;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "site_setting";

#[derive(Clone)]
pub struct SiteSettingRepository {
    base: BaseRepository,
}

impl SiteSettingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All settings
    pub async fn find_all(&self) -> RepoResult<Vec<SiteSetting>> {
        let settings: Vec<SiteSetting> = self
            .base
            .db()
            .query("SELECT * FROM site_setting ORDER BY key ASC")
            .await?
            .take(0)?;
        Ok(settings)
    }

    /// Look up one setting by its unique key
    pub async fn find_by_key(&self, key: &str) -> RepoResult<Option<SiteSetting>> {
        let key_owned = key.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM site_setting WHERE key = $key LIMIT 1")
            .bind(("key", key_owned))
            .await?;
        let settings: Vec<SiteSetting> = result.take(0)?;
        Ok(settings.into_iter().next())
    }

    /// Patch the existing row for `key`, or insert a new one.
    /// Never creates duplicate keys.
    pub async fn upsert(&self, key: &str, value: &str) -> RepoResult<SiteSetting> {
        if let Some(existing) = self.find_by_key(key).await? {
            #[derive(Serialize)]
            struct ValueMerge {
                value: String,
            }

            let rid = existing
                .id
                .clone()
                .ok_or_else(|| RepoError::Database("Setting record without id".to_string()))?;
            self.base
                .db()
                .query("UPDATE $rid MERGE $data")
                .bind(("rid", rid))
                .bind((
                    "data",
                    ValueMerge {
                        value: value.to_string(),
                    },
                ))
                .await?;

            return self
                .find_by_key(key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Setting {} not found", key)));
        }

        let setting = SiteSetting {
            id: None,
            key: key.to_string(),
            value: value.to_string(),
        };
        let created: Option<SiteSetting> = self.base.db().create(TABLE).content(setting).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create setting".to_string()))
    }
}
