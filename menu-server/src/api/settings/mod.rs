//! Site Setting API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", setting_routes())
}

fn setting_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{key}", get(handler::get_by_key).put(handler::upsert))
}
