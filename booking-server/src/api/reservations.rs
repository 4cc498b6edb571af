//! Reservation API handlers
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | /api/reservations?table_id=&reservation_date= | 200, array |
//! | POST | /api/reservations | 201, `{ message, reservationId }` |
//! | DELETE | /api/reservations | 200, `{ message }` |

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::{
    MessageResponse, Reservation, ReservationCreate, ReservationCreated, ReservationQuery,
};

use crate::services::reservation::{
    MISSING_FIELDS, MISSING_QUERY_PARAMS, MISSING_RESERVATION_ID, RESERVATION_CREATED,
    RESERVATION_DELETED,
};
use crate::state::AppState;

/// Body of `POST /api/reservations` as received
///
/// Fields stay untyped so an empty string reads as missing rather than as a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
    reservation_date: Option<Value>,
    table_id: Option<Value>,
    slot_id: Option<Value>,
}

/// Body of `DELETE /api/reservations` as received
#[derive(Debug, Default, Deserialize)]
pub struct DeleteBody {
    reservation_id: Option<Value>,
}

fn invalid(field: &str, value: impl Into<Value>) -> AppError {
    AppError::invalid_request(format!("Invalid {field}.")).with_detail(field, value)
}

/// Parse an identifier; blank or non-positive values are `None`
fn parse_id(field: &str, raw: &str) -> AppResult<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let id: i64 = raw.parse().map_err(|_| invalid(field, raw))?;
    Ok(Some(id).filter(|id| *id > 0))
}

fn parse_date(raw: &str) -> AppResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    shared::util::parse_day(raw).map(Some).ok_or_else(|| {
        AppError::invalid_request("Invalid reservation_date, expected YYYY-MM-DD.")
            .with_detail("reservation_date", raw)
    })
}

/// Identifier from a JSON body: a number or a numeric string
fn id_value(field: &str, value: Option<&Value>) -> AppResult<Option<i64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_id(field, s),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|id| Some(id).filter(|id| *id > 0))
            .ok_or_else(|| invalid(field, Value::Number(n.clone()))),
        Some(other) => Err(invalid(field, other.clone())),
    }
}

fn date_value(value: Option<&Value>) -> AppResult<Option<NaiveDate>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_date(s),
        Some(other) => Err(AppError::invalid_request(
            "Invalid reservation_date, expected YYYY-MM-DD.",
        )
        .with_detail("reservation_date", other.clone())),
    }
}

/// Presence and format checks for the list query
fn parse_list_query(query: &ReservationQuery) -> AppResult<(i64, NaiveDate)> {
    let table_id = parse_id("table_id", query.table_id.as_deref().unwrap_or_default())?;
    let reservation_date = parse_date(query.reservation_date.as_deref().unwrap_or_default())?;
    match (table_id, reservation_date) {
        (Some(table_id), Some(reservation_date)) => Ok((table_id, reservation_date)),
        _ => Err(AppError::invalid_request(MISSING_QUERY_PARAMS)),
    }
}

/// Presence and format checks for the create body
fn parse_create_body(body: &CreateBody) -> AppResult<ReservationCreate> {
    let reservation_date = date_value(body.reservation_date.as_ref())?;
    let table_id = id_value("table_id", body.table_id.as_ref())?;
    let slot_id = id_value("slot_id", body.slot_id.as_ref())?;
    match (reservation_date, table_id, slot_id) {
        (Some(date), Some(table_id), Some(slot_id)) => {
            Ok(ReservationCreate::new(date, table_id, slot_id))
        }
        _ => Err(AppError::invalid_request(MISSING_FIELDS)),
    }
}

pub async fn list_reservations(
    State(state): State<AppState>,
    query: Result<Query<ReservationQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Reservation>>> {
    let Query(query) = query.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let (table_id, reservation_date) = parse_list_query(&query)?;

    let rows = state
        .reservations
        .list(Some(table_id), Some(reservation_date))
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(rows))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    body: Result<Json<CreateBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReservationCreated>)> {
    let Json(body) = body.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let request = parse_create_body(&body)?;

    let reservation_id = state
        .reservations
        .create(&request)
        .await
        .map_err(|e| state.reject(e))?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreated {
            message: RESERVATION_CREATED.to_string(),
            reservation_id,
        }),
    ))
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    body: Result<Json<DeleteBody>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(body) = body.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let Some(reservation_id) = id_value("reservation_id", body.reservation_id.as_ref())? else {
        return Err(AppError::invalid_request(MISSING_RESERVATION_ID));
    };

    state
        .reservations
        .delete(Some(reservation_id))
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(MessageResponse::new(RESERVATION_DELETED)))
}
