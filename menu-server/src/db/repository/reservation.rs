//! Reservation Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Reservation, ReservationCreate, ReservationStatus};
use chrono::Utc;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Datetime;

const TABLE: &str = "reservation";

#[derive(Clone)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All reservation requests, newest first (management UIs)
    pub async fn find_all_admin(&self) -> RepoResult<Vec<Reservation>> {
        let reservations: Vec<Reservation> = self
            .base
            .db()
            .query("SELECT * FROM reservation ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(reservations)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let reservation: Option<Reservation> =
            self.base.db().select(record_id(TABLE, id)).await?;
        Ok(reservation)
    }

    /// Create a reservation request, status forced to pending
    pub async fn create(&self, data: ReservationCreate) -> RepoResult<Reservation> {
        let reservation = Reservation {
            id: None,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            customer_email: data.customer_email,
            party_size: data.party_size,
            reservation_date: data.reservation_date,
            reservation_time: data.reservation_time,
            special_requests: data.special_requests,
            status: ReservationStatus::Pending,
            created_at: Datetime::from(Utc::now()),
        };

        let created: Option<Reservation> =
            self.base.db().create(TABLE).content(reservation).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create reservation".to_string()))
    }

    /// Unconditional status overwrite; any status is reachable from any status
    pub async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> RepoResult<Reservation> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))?;

        #[derive(Serialize)]
        struct StatusMerge {
            status: ReservationStatus,
        }

        let rid = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $rid MERGE $data")
            .bind(("rid", rid))
            .bind(("data", StatusMerge { status }))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }
}
