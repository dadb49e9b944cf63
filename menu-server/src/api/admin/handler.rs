//! Admin Batch Operation Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::seed::{self, SeedOutcome};
use crate::migrate::{
    self, AssignReport, BatchInsertReport, BatchMenuItem, FeaturedReport, ReconcileReport,
    SubcategoryAssignment,
};
use crate::utils::AppResult;

/// POST /api/admin/seed - 幂等结构 seed
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedOutcome>> {
    let outcome = seed::seed_structure(&state.db).await?;
    Ok(Json(outcome))
}

#[derive(Debug, Deserialize)]
pub struct AssignPayload {
    pub assignments: Vec<SubcategoryAssignment>,
}

/// POST /api/admin/assign-subcategories - 子分类分配 + 重名去重
pub async fn assign_subcategories(
    State(state): State<ServerState>,
    Json(payload): Json<AssignPayload>,
) -> AppResult<Json<ReconcileReport>> {
    let report =
        migrate::assign_subcategories_and_dedupe(&state.db, &payload.assignments).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct AssignByNamePayload {
    pub category_slug: String,
    pub assignments: Vec<SubcategoryAssignment>,
}

/// POST /api/admin/assign-by-name - 建子分类并按名称分配
pub async fn assign_by_name(
    State(state): State<ServerState>,
    Json(payload): Json<AssignByNamePayload>,
) -> AppResult<Json<AssignReport>> {
    let report =
        migrate::assign_by_name(&state.db, &payload.category_slug, &payload.assignments).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct MarkFeaturedPayload {
    pub names: Vec<String>,
}

/// POST /api/admin/mark-featured - 按名称标记推荐
pub async fn mark_featured(
    State(state): State<ServerState>,
    Json(payload): Json<MarkFeaturedPayload>,
) -> AppResult<Json<FeaturedReport>> {
    let report = migrate::mark_featured(&state.db, &payload.names).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct BatchPayload {
    pub items: Vec<BatchMenuItem>,
}

/// POST /api/admin/menu-items/batch - 批量导入 (slug 解析, 未知分类跳过)
pub async fn insert_batch(
    State(state): State<ServerState>,
    Json(payload): Json<BatchPayload>,
) -> AppResult<Json<BatchInsertReport>> {
    let report = migrate::insert_menu_items_batch(&state.db, &payload.items).await?;
    Ok(Json(report))
}
