//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the request (400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reservation already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Success response whose body does not decode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message reported by the server, if the failure came with a response
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::InvalidRequest(msg)
            | ClientError::NotFound(msg)
            | ClientError::Conflict(msg)
            | ClientError::Server { message: msg, .. } => Some(msg),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ClientError::NotFound("Reservation not found.".into());
        assert_eq!(err.server_message(), Some("Reservation not found."));

        let err = ClientError::Server {
            status: 500,
            message: "Internal server error.".into(),
        };
        assert_eq!(err.server_message(), Some("Internal server error."));
        assert_eq!(err.to_string(), "Server error (500): Internal server error.");

        let err: ClientError = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err().into();
        assert!(matches!(err, ClientError::Serialization(_)));
        assert!(err.server_message().is_none());
    }
}
