//! Database access layer
//!
//! The service talks to persistence only through [`ReservationStore`]. Each
//! implementation owns a `sqlx` pool; every statement acquires a connection
//! for its own duration and returns it to the pool afterwards.
//!
//! The `(table_id, reservation_date, slot_id)` UNIQUE constraint is the only
//! double-booking guard. Stores never read before writing.

pub mod postgres;
pub mod sqlite;

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{NewReservation, Reservation, Slot};
use thiserror::Error;

use crate::config::{Config, DatabaseConfig};

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver reported a unique-constraint violation
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Split unique-constraint violations from every other driver error
    pub(crate) fn classify(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                StoreError::UniqueViolation(db_err.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations backing the reservation service
#[async_trait]
pub trait ReservationStore: Send + Sync + 'static {
    /// Reservations of one table on one day, joined with their slot label
    async fn list_reservations(
        &self,
        table_id: i64,
        reservation_date: NaiveDate,
    ) -> StoreResult<Vec<Reservation>>;

    /// Insert a reservation and return its generated id
    async fn insert_reservation(&self, reservation: &NewReservation) -> StoreResult<i64>;

    /// Delete by id and return the number of affected rows
    async fn delete_reservation(&self, reservation_id: i64) -> StoreResult<u64>;

    /// Seeded slot catalog, ordered by id
    async fn list_slots(&self) -> StoreResult<Vec<Slot>>;

    /// Cheap round trip used by the health check
    async fn ping(&self) -> StoreResult<()>;
}

/// Open the configured store and apply its migrations
pub async fn connect(config: &Config) -> StoreResult<Arc<dyn ReservationStore>> {
    let store: Arc<dyn ReservationStore> = match &config.database {
        DatabaseConfig::Sqlite(url) => {
            Arc::new(SqliteStore::connect(url, config.max_connections).await?)
        }
        DatabaseConfig::PostgresUrl(url) => {
            Arc::new(PgStore::connect_url(url, config.max_connections).await?)
        }
        DatabaseConfig::Postgres {
            host,
            port,
            user,
            password,
            database,
        } => {
            let options = sqlx::postgres::PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database);
            Arc::new(PgStore::connect_with(options, config.max_connections).await?)
        }
    };
    Ok(store)
}
