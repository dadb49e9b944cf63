//! Menu Item API 模块

mod handler;

#[cfg(test)]
mod tests;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu-items", menu_item_routes())
}

fn menu_item_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/featured", get(handler::list_featured))
        .route("/admin", get(handler::list_admin))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/by-category/{category_id}", get(handler::list_by_category))
}
