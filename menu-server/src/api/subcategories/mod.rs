//! Subcategory API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/subcategories", subcategory_routes())
}

fn subcategory_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/admin", get(handler::list_admin))
}
