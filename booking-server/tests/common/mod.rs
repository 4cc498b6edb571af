//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use booking_server::api::create_router;
use booking_server::db::{ReservationStore, SqliteStore, StoreError, StoreResult};
use booking_server::state::AppState;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use shared::models::{NewReservation, Reservation, Slot};
use tower::ServiceExt;

/// Router over a fresh in-memory SQLite store
pub async fn test_app() -> Router {
    test_app_in(true).await
}

pub async fn test_app_in(development: bool) -> Router {
    let store = SqliteStore::in_memory()
        .await
        .expect("in-memory store should open");
    create_router(AppState::with_store(Arc::new(store), development))
}

/// Router whose store fails every call
pub fn failing_app(development: bool) -> Router {
    create_router(AppState::with_store(Arc::new(FailingStore), development))
}

pub struct FailingStore;

#[async_trait]
impl ReservationStore for FailingStore {
    async fn list_reservations(&self, _: i64, _: NaiveDate) -> StoreResult<Vec<Reservation>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert_reservation(&self, _: &NewReservation) -> StoreResult<i64> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_reservation(&self, _: i64) -> StoreResult<u64> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_slots(&self) -> StoreResult<Vec<Slot>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn list(app: &Router, table_id: i64, date: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        get(&format!(
            "/api/reservations?table_id={table_id}&reservation_date={date}"
        )),
    )
    .await
}

pub async fn create(
    app: &Router,
    table_id: i64,
    date: &str,
    slot_id: i64,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        json_request(
            "POST",
            "/api/reservations",
            serde_json::json!({
                "reservation_date": date,
                "table_id": table_id,
                "slot_id": slot_id,
            }),
        ),
    )
    .await
}

pub async fn delete(app: &Router, reservation_id: i64) -> (StatusCode, serde_json::Value) {
    send(
        app,
        json_request(
            "DELETE",
            "/api/reservations",
            serde_json::json!({ "reservation_id": reservation_id }),
        ),
    )
    .await
}
