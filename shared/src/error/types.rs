//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the booking system, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending table ids, requested times, ...)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// The "nothing free" rejection shown to the customer
    pub fn no_tables_available() -> Self {
        Self::new(ErrorCode::NoTablesAvailable)
    }

    /// Create a table conflict error for the given table
    pub fn table_conflict(table_id: i64) -> Self {
        Self::new(ErrorCode::TableConflict).with_detail("table_id", table_id)
    }

    /// Create a table not found error for the given table
    pub fn table_not_found(table_id: i64) -> Self {
        Self::with_message(
            ErrorCode::TableNotFound,
            format!("Table {} not found", table_id),
        )
        .with_detail("table_id", table_id)
    }

    /// Create a booking not found error
    pub fn booking_not_found(booking_id: i64) -> Self {
        Self::with_message(
            ErrorCode::BookingNotFound,
            format!("Booking {} not found", booking_id),
        )
        .with_detail("booking_id", booking_id)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
