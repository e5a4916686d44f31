//! Data models
//!
//! Plain in-memory values handed to the booking engine by whatever layer
//! loads them. All IDs are `i64`.

pub mod booking;
pub mod dining_table;
pub mod restaurant;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use restaurant::*;
