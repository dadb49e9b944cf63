//! Reservation Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use surrealdb::sql::Datetime;
use validator::Validate;

pub type ReservationId = RecordId;

/// Reservation request lifecycle status
///
/// Any status is settable from any status by admin; there is no
/// enforced transition graph. Modeled as a closed enum so a guard
/// table can be added if business rules ever require one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ReservationId>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub party_size: i32,
    /// ISO date, e.g. "2025-06-14"
    pub reservation_date: String,
    /// e.g. "19:30"
    pub reservation_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: Datetime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 1, max = 100))]
    pub customer_name: String,
    #[validate(length(min = 5, max = 20))]
    pub customer_phone: String,
    #[validate(email)]
    pub customer_email: Option<String>,
    #[validate(range(min = 1, max = 50))]
    pub party_size: i32,
    pub reservation_date: String,
    pub reservation_time: String,
    pub special_requests: Option<String>,
}
