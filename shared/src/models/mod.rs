//! Data models
//!
//! Shared between booking-server and booking-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64`.

pub mod reservation;
pub mod slot;

// Re-exports
pub use reservation::*;
pub use slot::*;
