//! Category API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", category_routes())
}

fn category_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/admin", get(handler::list_admin))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/subcategories", get(handler::list_subcategories))
        .route("/{id}/items", get(handler::list_items))
}
