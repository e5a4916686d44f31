//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Restaurant errors
/// - 2xxx: Table errors
/// - 3xxx: Booking errors
///
/// Codes outside the assigned ranges count as general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Restaurant errors (1xxx)
    Restaurant,
    /// Table errors (2xxx)
    Table,
    /// Booking errors (3xxx)
    Booking,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Restaurant,
            2000..3000 => Self::Table,
            3000..4000 => Self::Booking,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Restaurant => "restaurant",
            Self::Table => "table",
            Self::Booking => "booking",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(3999), ErrorCategory::Booking);
        assert_eq!(ErrorCategory::from_code(4000), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::General);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::InvalidBusinessHours.category(),
            ErrorCategory::Restaurant
        );
        assert_eq!(ErrorCode::TableNotFound.category(), ErrorCategory::Table);
        assert_eq!(
            ErrorCode::NoTablesAvailable.category(),
            ErrorCategory::Booking
        );
        assert_eq!(
            ErrorCode::RestaurantHasNoTables.category(),
            ErrorCategory::Restaurant
        );
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Booking).unwrap();
        assert_eq!(json, "\"booking\"");

        let category: ErrorCategory = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(category, ErrorCategory::Restaurant);
        assert_eq!(category.name(), "restaurant");
    }
}
