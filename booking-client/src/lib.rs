//! booking-client - HTTP client and booking view state for the reservation API
//!
//! - [`HttpClient`]: network implementation of [`ReservationApi`]
//! - [`BookingView`]: modal state of the booking screen, driven by user actions

pub mod config;
pub mod error;
pub mod http;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, ReservationApi};
pub use view::{
    BookingView, ListRequest, Modal, Notice, NoticeKind, ReservedSlot, SlotButton, ViewError,
};

// Re-export shared types for convenience
pub use shared::models::{
    MessageResponse, Reservation, ReservationCreate, ReservationCreated, Slot,
};
