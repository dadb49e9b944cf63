//! Operating Hours API 模块

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::db::models::OperatingHours;
use crate::db::repository::OperatingHoursRepository;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/hours", get(list))
}

/// GET /api/hours - 营业时间，周日在前
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OperatingHours>>> {
    let repo = OperatingHoursRepository::new(state.db.clone());
    let hours = repo.find_all().await?;
    Ok(Json(hours))
}
