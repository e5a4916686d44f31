//! Booking Engine - restaurant table allocation
//!
//! # Overview
//!
//! Given a restaurant's tables and the bookings already made for a date, the
//! engine decides which table(s) a new party gets:
//!
//! - **Availability** (`availability`): tables with no booking intersecting
//!   the requested half-open window
//! - **Allocation** (`allocation`): exact table first, then (when optimizing)
//!   an exact-sum combination of smaller tables, then the smallest bigger table
//! - **Booking** (`booking`): request validation and an in-memory ledger that
//!   serializes check-then-write per restaurant and date
//!
//! The engine functions are pure: callers hand in fully loaded collections.
//!
//! # Module layout
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # configuration
//! ├── availability/  # time windows, booking index, filter
//! ├── allocation/    # optimizer and strategies
//! ├── booking/       # request validation, ledger
//! └── utils/         # logging, slot enumeration
//! ```

pub mod allocation;
pub mod availability;
pub mod booking;
pub mod core;
pub mod utils;

// Re-export public types
pub use allocation::{
    Allocation, AllocationKind, AllocationStrategy, find_tables, select_tables,
    select_tables_with,
};
pub use availability::{BookingIndex, TimeWindow, available_tables};
pub use booking::{BookingLedger, BookingRequest, resolve_request};
pub use core::EngineConfig;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> EngineConfig {
    dotenv::dotenv().ok();
    let config = EngineConfig::from_env();
    utils::logger::init_from_config(&config);
    tracing::info!(
        strategy = ?config.allocation_strategy,
        slot_interval = config.slot_interval_minutes,
        max_booking = config.max_booking_minutes,
        "Booking engine configured"
    );
    config
}
