//! PostgreSQL reservation store

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{NewReservation, Reservation, Slot};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::{ReservationStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect from a `postgres://` URL
    pub async fn connect_url(url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = PgConnectOptions::from_str(url)?;
        Self::connect_with(options, max_connections).await
    }

    /// Connect with explicit options and run migrations
    pub async fn connect_with(options: PgConnectOptions, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(max_connections, "PostgreSQL pool established");

        sqlx::migrate!("./migrations/postgres").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl ReservationStore for PgStore {
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
            WHERE r.table_id = $1 AND r.reservation_date = $2
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
            VALUES ($1, $2, $3)
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
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
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
