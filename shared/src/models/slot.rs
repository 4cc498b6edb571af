//! Slot Model
//!
//! Slots are seed data: twelve hourly buckets from 11:00 to 22:00 whose
//! identifiers run 1..=12 in time order. The migrations insert exactly this
//! catalog, so clients can map a label to its id without asking the server.

use serde::{Deserialize, Serialize};

/// Hour of the first bookable slot
pub const FIRST_SLOT_HOUR: u32 = 11;

/// Number of bookable slots per day
pub const SLOT_COUNT: u32 = 12;

/// Time-of-day bucket a reservation occupies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Slot {
    pub id: i64,
    /// Label such as `"11:00"`
    pub time: String,
}

impl Slot {
    /// Build the catalog entry for the given hour, if it is bookable
    pub fn for_hour(hour: u32) -> Option<Self> {
        if !(FIRST_SLOT_HOUR..FIRST_SLOT_HOUR + SLOT_COUNT).contains(&hour) {
            return None;
        }
        Some(Self {
            id: i64::from(hour - FIRST_SLOT_HOUR + 1),
            time: format!("{hour}:00"),
        })
    }
}

/// The full seeded slot catalog, ordered by id
pub fn slot_catalog() -> Vec<Slot> {
    (FIRST_SLOT_HOUR..FIRST_SLOT_HOUR + SLOT_COUNT)
        .filter_map(Slot::for_hour)
        .collect()
}

/// Resolve a label (`"13:00"`, `"13:00:00"`) to its slot id
pub fn slot_id_for_label(label: &str) -> Option<i64> {
    let hour: u32 = label.split(':').next()?.trim().parse().ok()?;
    Slot::for_hour(hour).map(|s| s.id)
}

/// Trim a stored time down to `HH:MM`
///
/// Stores that keep a `TIME` column render seconds (`"11:00:00"`); the UI
/// compares labels without them.
pub fn normalize_slot_label(time: &str) -> String {
    let mut parts = time.split(':');
    match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => format!("{h}:{m}"),
        _ => time.to_string(),
    }
}
