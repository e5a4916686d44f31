//! Availability Filter
//!
//! Decides which tables of a restaurant are free for a requested
//! `[start, end)` window on a date, given the bookings already made.
//! Overlap is half-open: a booking ending at `T` does not block a request
//! starting at `T`.

mod filter;
mod index;
mod window;

pub use filter::{available_tables, available_tables_indexed};
pub use index::BookingIndex;
pub use window::TimeWindow;
