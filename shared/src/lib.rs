//! Shared types for the table booking workspace
//!
//! Wire models, the slot catalog, and the unified error system used by both
//! booking-server and booking-client.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
