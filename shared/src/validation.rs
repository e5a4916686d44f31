//! Input validation helpers
//!
//! Text length limits for restaurant and table payloads.

use crate::error::{AppError, AppResult};

/// Restaurant and table names
pub const MAX_NAME_LEN: usize = 100;

/// Restaurant description (the public listing requires at least this much text)
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Restaurant description upper bound
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a string has at least `min_len` characters.
pub fn validate_min_text(value: &str, field: &str, min_len: usize) -> AppResult<()> {
    if value.trim().chars().count() < min_len {
        return Err(AppError::validation(format!(
            "{field} is too short (min {min_len} chars)"
        ))
        .with_detail("field", field));
    }
    Ok(())
}
