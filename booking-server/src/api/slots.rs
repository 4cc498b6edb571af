//! Slot catalog endpoint

use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::Slot;

use crate::state::AppState;

pub async fn list_slots(State(state): State<AppState>) -> AppResult<Json<Vec<Slot>>> {
    let slots = state
        .reservations
        .slots()
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(slots))
}
