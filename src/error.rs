//! Error types for nvrdash
//!
//! This module defines the main error type used throughout nvrdash and the
//! date-range validation taxonomy surfaced to HTTP callers as 400 responses.

use thiserror::Error;

/// Result type alias for nvrdash operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Date-range validation failures.
///
/// Validation is advisory: the normalization core never rejects data on its
/// own, and the HTTP layer decides whether a failed validation becomes a 400.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// One or both of the start/end parameters were absent or empty.
    #[error("start and end parameters required")]
    MissingParameter,

    /// A parameter was present but not a `YYYY-MM-DD` calendar date.
    #[error("invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidFormat(String),

    /// Both dates parsed but start is after end.
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },
}

/// Main error type for nvrdash
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date range error: {0}")]
    DateRange(#[from] DateRangeError),

    #[error("Invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("Backend returned {status}")]
    Backend { status: u16 },

    #[error("Backend connection failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_error_messages() {
        assert_eq!(
            DateRangeError::MissingParameter.to_string(),
            "start and end parameters required"
        );
        assert_eq!(
            DateRangeError::InvalidFormat("2025-13-99".to_string()).to_string(),
            "invalid date format (expected YYYY-MM-DD): 2025-13-99"
        );
        let inverted = DateRangeError::InvertedRange {
            start: "2025-09-24".to_string(),
            end: "2025-07-26".to_string(),
        };
        assert_eq!(
            inverted.to_string(),
            "start date 2025-09-24 is after end date 2025-07-26"
        );
    }

    #[test]
    fn test_date_range_error_converts_to_dashboard_error() {
        let err: DashboardError = DateRangeError::MissingParameter.into();
        assert!(matches!(err, DashboardError::DateRange(_)));
    }

    #[test]
    fn test_backend_error_message() {
        let err = DashboardError::Backend { status: 503 };
        assert_eq!(err.to_string(), "Backend returned 503");
    }
}
