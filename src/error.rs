//! Error type shared by every phase of a monitoring run.
//!
//! All variants end up at the single failure boundary in `main`, where they
//! are logged identically. A missing png/jpg image is not an error and never
//! shows up here.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// Transport failure while calling the search API. The underlying cause is
    /// logged where it happens and intentionally not carried along.
    #[error("connection error")]
    Connection,

    /// Non-2xx search response, only raised when strict status checking is on.
    #[error("search API returned {status}")]
    Status { status: StatusCode },

    /// Transport failure while downloading the chosen image.
    #[error("image download failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Response body is not valid JSON (structured parse mode only).
    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_message_is_generic() {
        assert_eq!(MonitorError::Connection.to_string(), "connection error");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MonitorError = io.into();
        assert!(matches!(err, MonitorError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_status_error_message() {
        let err = MonitorError::Status {
            status: StatusCode::UNAUTHORIZED,
        };
        assert_eq!(err.to_string(), "search API returned 401 Unauthorized");
    }
}
