//! Reservation API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", reservation_routes())
}

fn reservation_routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/admin", get(handler::list_admin))
        .route("/{id}/status", put(handler::update_status))
}
