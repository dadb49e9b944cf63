//! Site Setting API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::SiteSetting;
use crate::db::repository::SiteSettingRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/settings - 全部配置项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SiteSetting>>> {
    let repo = SiteSettingRepository::new(state.db.clone());
    let settings = repo.find_all().await?;
    Ok(Json(settings))
}

/// GET /api/settings/:key - 按键查询
pub async fn get_by_key(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<SiteSetting>> {
    let repo = SiteSettingRepository::new(state.db.clone());
    let setting = repo
        .find_by_key(&key)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Setting {} not found", key)))?;
    Ok(Json(setting))
}

#[derive(Debug, Deserialize)]
pub struct UpsertPayload {
    pub value: String,
}

/// PUT /api/settings/:key - upsert：存在则改值，不存在则新建
pub async fn upsert(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    Json(payload): Json<UpsertPayload>,
) -> AppResult<Json<SiteSetting>> {
    let repo = SiteSettingRepository::new(state.db.clone());
    let setting = repo.upsert(&key, &payload.value).await?;
    Ok(Json(setting))
}
