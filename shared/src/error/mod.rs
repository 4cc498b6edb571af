//! Unified error system for the booking workspace
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Error envelope returned by the HTTP layer
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::ReservationConflict);
//! assert_eq!(err.http_status().as_u16(), 409);
//!
//! let err = AppError::invalid_request("Missing required fields.")
//!     .with_detail("field", "slot_id");
//!
//! let response = ApiResponse::error(&err);
//! assert_eq!(response.code, 5);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
