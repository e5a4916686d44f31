//! Shared types for the table booking system
//!
//! Domain models (restaurants, dining tables, bookings), the unified error
//! system and small utilities used by the engine and by whatever persistence
//! or presentation layer sits in front of it.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
