//! SQLite reservation store (embedded file or in-memory)

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{NewReservation, Reservation, Slot};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use super::{ReservationStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database at `url`, creating it if missing, and run migrations
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // An in-memory database lives and dies with its only connection
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::info!(in_memory, "SQLite pool established");

        sqlx::migrate!("./migrations/sqlite").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Fresh private in-memory database
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect("sqlite::memory:", 1).await
    }
}

#[async_trait]
impl ReservationStore for SqliteStore {
    async fn list_reservations(
        &self,
        table_id: i64,
        reservation_date: NaiveDate,
    ) -> StoreResult<Vec<Reservation>> {
        let rows: Vec<Reservation> = sqlx::query_as(
            r#"
            SELECT
                r.id AS reservation_id,
                r.reservation_date,
                r.table_id,
                r.slot_id,
                s.time AS slot_time,
                r.status
            FROM reservations r
            JOIN slots s ON r.slot_id = s.id
            WHERE r.table_id = ? AND r.reservation_date = ?
            "#,
        )
        .bind(table_id)
        .bind(reservation_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_reservation(&self, reservation: &NewReservation) -> StoreResult<i64> {
        sqlx::query_scalar(
            r#"
            INSERT INTO reservations (reservation_date, table_id, slot_id)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(reservation.reservation_date)
        .bind(reservation.table_id)
        .bind(reservation.slot_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::classify)
    }

    async fn delete_reservation(&self, reservation_id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(reservation_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_slots(&self) -> StoreResult<Vec<Slot>> {
        let rows: Vec<Slot> = sqlx::query_as("SELECT id, time FROM slots ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
