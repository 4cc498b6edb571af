//! Service-layer error type
//!
//! `ServiceError` is the reservation taxonomy. It bridges store errors
//! (`StoreError`) and the API-layer error (`AppError`); handlers convert
//! through `AppState::reject`, which decides whether detail is exposed.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required input is absent or unparsable (400)
    #[error("{0}")]
    InvalidRequest(String),

    /// The (table, date, slot) triple is already booked (409)
    #[error("reservation already exists")]
    Conflict,

    /// Delete target does not exist (404)
    #[error("reservation not found")]
    NotFound,

    /// Any other persistence failure (500)
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation(_) => ServiceError::Conflict,
            other => ServiceError::Store(other),
        }
    }
}

impl ServiceError {
    /// Convert into the API error, attaching internal detail only when asked
    ///
    /// Store failures are always logged; their text reaches the client only
    /// in development.
    pub fn into_app_error(self, expose_detail: bool) -> AppError {
        match self {
            ServiceError::InvalidRequest(msg) => AppError::invalid_request(msg),
            ServiceError::Conflict => AppError::new(ErrorCode::ReservationConflict),
            ServiceError::NotFound => AppError::new(ErrorCode::ReservationNotFound),
            ServiceError::Store(err) => {
                tracing::error!(error = %err, "Reservation store error");
                let app_err = AppError::new(ErrorCode::InternalError);
                if expose_detail {
                    app_err.with_detail("error", err.to_string())
                } else {
                    app_err
                }
            }
        }
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
