//! Admin Batch Operations API 模块
//!
//! 一次性维护操作：结构 seed、子分类分配与去重、推荐标记、批量导入。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/seed", post(handler::seed))
        .route(
            "/assign-subcategories",
            post(handler::assign_subcategories),
        )
        .route("/assign-by-name", post(handler::assign_by_name))
        .route("/mark-featured", post(handler::mark_featured))
        .route("/menu-items/batch", post(handler::insert_batch))
}
