//! Application state

use std::sync::Arc;

use shared::error::AppError;

use crate::config::Config;
use crate::db::{self, ReservationStore, StoreResult};
use crate::error::ServiceError;
use crate::services::ReservationService;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub reservations: ReservationService,
    /// Attach internal error detail to responses (development only)
    pub expose_error_detail: bool,
}

impl AppState {
    /// Connect the configured store and build the state around it
    pub async fn new(config: &Config) -> StoreResult<Self> {
        let store = db::connect(config).await?;
        Ok(Self::with_store(store, config.is_development()))
    }

    /// Build the state around an already opened store
    pub fn with_store(store: Arc<dyn ReservationStore>, expose_error_detail: bool) -> Self {
        Self {
            reservations: ReservationService::new(store),
            expose_error_detail,
        }
    }

    /// Turn a service failure into the HTTP error for this deployment
    pub fn reject(&self, err: ServiceError) -> AppError {
        err.into_app_error(self.expose_error_detail)
    }
}
