//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation row joined with its slot label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub reservation_id: i64,
    pub reservation_date: NaiveDate,
    pub table_id: i64,
    pub slot_id: i64,
    pub slot_time: String,
    pub status: String,
}

/// Query string of `GET /api/reservations`
///
/// Kept as raw strings: a missing, empty or unparsable value is reported as
/// an invalid request instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationQuery {
    pub table_id: Option<String>,
    pub reservation_date: Option<String>,
}

/// Body of `POST /api/reservations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub reservation_date: Option<NaiveDate>,
    pub table_id: Option<i64>,
    pub slot_id: Option<i64>,
}

impl ReservationCreate {
    pub fn new(reservation_date: NaiveDate, table_id: i64, slot_id: i64) -> Self {
        Self {
            reservation_date: Some(reservation_date),
            table_id: Some(table_id),
            slot_id: Some(slot_id),
        }
    }
}

/// Body of `DELETE /api/reservations`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationDelete {
    pub reservation_id: Option<i64>,
}

/// Validated insert payload handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewReservation {
    pub reservation_date: NaiveDate,
    pub table_id: i64,
    pub slot_id: i64,
}

/// Response of a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreated {
    pub message: String,
    #[serde(rename = "reservationId")]
    pub reservation_id: i64,
}

/// Plain `{ "message": ... }` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
