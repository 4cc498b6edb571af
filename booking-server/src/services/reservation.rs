//! Reservation service
//!
//! Each operation is one independent statement against the store. There is
//! no read-before-write: a second booking of the same table/date/slot is
//! rejected by the store's uniqueness constraint and surfaces as
//! [`ServiceError::Conflict`].

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{NewReservation, Reservation, ReservationCreate, Slot};

use crate::db::ReservationStore;
use crate::error::{ServiceError, ServiceResult};

pub const MISSING_QUERY_PARAMS: &str = "Missing required query parameters.";
pub const MISSING_FIELDS: &str = "Missing required fields.";
pub const MISSING_RESERVATION_ID: &str = "Missing reservation_id in the request body.";
pub const RESERVATION_CREATED: &str = "Reservation created successfully.";
pub const RESERVATION_DELETED: &str = "Reservation deleted successfully.";

/// Identifiers start at 1; zero or negative values count as absent
fn present_id(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

#[derive(Clone)]
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
}

impl ReservationService {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// Reservations for one table on one day (store order)
    pub async fn list(
        &self,
        table_id: Option<i64>,
        reservation_date: Option<NaiveDate>,
    ) -> ServiceResult<Vec<Reservation>> {
        let (Some(table_id), Some(reservation_date)) = (present_id(table_id), reservation_date)
        else {
            return Err(ServiceError::InvalidRequest(MISSING_QUERY_PARAMS.into()));
        };

        let rows = self
            .store
            .list_reservations(table_id, reservation_date)
            .await?;
        tracing::debug!(table_id, %reservation_date, count = rows.len(), "Listed reservations");
        Ok(rows)
    }

    /// Book a slot; returns the generated reservation id
    pub async fn create(&self, request: &ReservationCreate) -> ServiceResult<i64> {
        let (Some(reservation_date), Some(table_id), Some(slot_id)) = (
            request.reservation_date,
            present_id(request.table_id),
            present_id(request.slot_id),
        ) else {
            return Err(ServiceError::InvalidRequest(MISSING_FIELDS.into()));
        };

        let new = NewReservation {
            reservation_date,
            table_id,
            slot_id,
        };
        let id = self.store.insert_reservation(&new).await.map_err(|e| {
            let err = ServiceError::from(e);
            if matches!(err, ServiceError::Conflict) {
                tracing::info!(table_id, %reservation_date, slot_id, "Slot already booked");
            }
            err
        })?;

        tracing::info!(reservation_id = id, table_id, %reservation_date, slot_id, "Reservation created");
        Ok(id)
    }

    /// Remove a reservation; a missing row is [`ServiceError::NotFound`]
    pub async fn delete(&self, reservation_id: Option<i64>) -> ServiceResult<()> {
        let Some(reservation_id) = present_id(reservation_id) else {
            return Err(ServiceError::InvalidRequest(MISSING_RESERVATION_ID.into()));
        };

        let affected = self.store.delete_reservation(reservation_id).await?;
        if affected == 0 {
            return Err(ServiceError::NotFound);
        }

        tracing::info!(reservation_id, "Reservation deleted");
        Ok(())
    }

    pub async fn slots(&self) -> ServiceResult<Vec<Slot>> {
        Ok(self.store.list_slots().await?)
    }

    pub async fn ping(&self) -> ServiceResult<()> {
        Ok(self.store.ping().await?)
    }
}
