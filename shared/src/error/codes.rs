//! Unified error codes for the booking system
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Restaurant errors
//! - 2xxx: Table errors
//! - 3xxx: Booking errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so callers can persist or
/// forward them without depending on the enum layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Restaurant ====================
    /// Closing time is not after opening time
    InvalidBusinessHours = 1002,
    /// Restaurant has no tables to allocate
    RestaurantHasNoTables = 1004,

    // ==================== 2xxx: Table ====================
    /// Table not found in the restaurant inventory
    TableNotFound = 2001,
    /// Table capacity must be positive
    InvalidCapacity = 2002,
    /// Table id already present in the inventory
    DuplicateTable = 2003,

    // ==================== 3xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 3001,
    /// No table or combination of tables is free
    NoTablesAvailable = 3002,
    /// Requested time falls outside business hours
    OutsideBusinessHours = 3003,
    /// Start time is not before end time
    InvalidBookingWindow = 3004,
    /// Requested length exceeds the configured maximum
    BookingTooLong = 3005,
    /// Party size must be at least one guest
    InvalidPartySize = 3006,
    /// A table was taken by an overlapping booking before commit
    TableConflict = 3007,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            // Restaurant
            ErrorCode::InvalidBusinessHours => "Closing time cannot be before opening time.",
            ErrorCode::RestaurantHasNoTables => "Restaurant has no tables",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::InvalidCapacity => "Table capacity must be at least one seat",
            ErrorCode::DuplicateTable => "Table already belongs to this restaurant",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::NoTablesAvailable => "No tables available for this time.",
            ErrorCode::OutsideBusinessHours => "Booking is outside restaurant opening hours",
            ErrorCode::InvalidBookingWindow => "Booking must end after it starts",
            ErrorCode::BookingTooLong => "Booking length exceeds the allowed maximum",
            ErrorCode::InvalidPartySize => "Party size must be at least one guest",
            ErrorCode::TableConflict => "Table is already booked for this time",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            // Restaurant
            1002 => Ok(ErrorCode::InvalidBusinessHours),
            1004 => Ok(ErrorCode::RestaurantHasNoTables),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::InvalidCapacity),
            2003 => Ok(ErrorCode::DuplicateTable),

            // Booking
            3001 => Ok(ErrorCode::BookingNotFound),
            3002 => Ok(ErrorCode::NoTablesAvailable),
            3003 => Ok(ErrorCode::OutsideBusinessHours),
            3004 => Ok(ErrorCode::InvalidBookingWindow),
            3005 => Ok(ErrorCode::BookingTooLong),
            3006 => Ok(ErrorCode::InvalidPartySize),
            3007 => Ok(ErrorCode::TableConflict),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);

        // Restaurant
        assert_eq!(ErrorCode::InvalidBusinessHours.code(), 1002);

        // Table
        assert_eq!(ErrorCode::TableNotFound.code(), 2001);
        assert_eq!(ErrorCode::InvalidCapacity.code(), 2002);
        assert_eq!(ErrorCode::DuplicateTable.code(), 2003);

        // Booking
        assert_eq!(ErrorCode::BookingNotFound.code(), 3001);
        assert_eq!(ErrorCode::NoTablesAvailable.code(), 3002);
        assert_eq!(ErrorCode::TableConflict.code(), 3007);
        assert_eq!(ErrorCode::RestaurantHasNoTables.code(), 1004);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::ValidationFailed.is_success());
        assert!(!ErrorCode::NoTablesAvailable.is_success());
    }

    #[test]
    fn test_try_from_roundtrips_every_variant() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidRequest,
            ErrorCode::RequiredField,
            ErrorCode::InvalidBusinessHours,
            ErrorCode::RestaurantHasNoTables,
            ErrorCode::TableNotFound,
            ErrorCode::InvalidCapacity,
            ErrorCode::DuplicateTable,
            ErrorCode::BookingNotFound,
            ErrorCode::NoTablesAvailable,
            ErrorCode::OutsideBusinessHours,
            ErrorCode::InvalidBookingWindow,
            ErrorCode::BookingTooLong,
            ErrorCode::InvalidPartySize,
            ErrorCode::TableConflict,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(9001), Err(InvalidErrorCode(9001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::NoTablesAvailable).unwrap();
        assert_eq!(json, "3002");

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::TableNotFound);

        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::TableConflict), "3007");
    }
}
