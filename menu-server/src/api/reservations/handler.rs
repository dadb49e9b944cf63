//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationStatus};
use crate::db::repository::ReservationRepository;
use crate::utils::AppResult;

/// POST /api/reservations - 创建预订请求 (状态强制 pending)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    payload.validate()?;
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.create(payload).await?;
    Ok(Json(reservation))
}

/// GET /api/reservations/admin - 全部预订，最新在前
pub async fn list_admin(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservations = repo.find_all_admin().await?;
    Ok(Json(reservations))
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: ReservationStatus,
}

/// PUT /api/reservations/:id/status - 无条件状态覆盖
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusPayload>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo.update_status(&id, payload.status).await?;
    Ok(Json(reservation))
}
