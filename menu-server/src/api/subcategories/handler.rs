//! Subcategory API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{Subcategory, SubcategoryCreate};
use crate::db::repository::SubcategoryRepository;
use crate::utils::AppResult;

/// GET /api/subcategories/admin - 获取所有子分类 (含停用)
pub async fn list_admin(State(state): State<ServerState>) -> AppResult<Json<Vec<Subcategory>>> {
    let repo = SubcategoryRepository::new(state.db.clone());
    let subcategories = repo.find_all_admin().await?;
    Ok(Json(subcategories))
}

/// POST /api/subcategories - 创建子分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SubcategoryCreate>,
) -> AppResult<Json<Subcategory>> {
    let repo = SubcategoryRepository::new(state.db.clone());
    let subcategory = repo.create(payload).await?;
    Ok(Json(subcategory))
}
