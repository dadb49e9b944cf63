//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate, MenuItem, Subcategory};
use crate::db::repository::{CategoryRepository, MenuItemRepository, SubcategoryRepository};
use crate::utils::{AppError, AppResult};

/// GET /api/categories - 获取所有活跃分类 (按 sort_order 排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories))
}

/// GET /api/categories/admin - 获取所有分类 (含停用)
pub async fn list_admin(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all_admin().await?;
    Ok(Json(categories))
}

/// GET /api/categories/:id - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
    Ok(Json(category))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    Ok(Json(category))
}

/// PUT /api/categories/:id - 更新分类 (稀疏 patch)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.update(&id, payload).await?;
    Ok(Json(category))
}

/// GET /api/categories/:id/subcategories - 分类下的活跃子分类
pub async fn list_subcategories(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Subcategory>>> {
    let repo = SubcategoryRepository::new(state.db.clone());
    let subcategories = repo.find_by_category(&id).await?;
    Ok(Json(subcategories))
}

/// GET /api/categories/:id/items - 分类下的可售菜品
pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_by_category(&id).await?;
    Ok(Json(items))
}
