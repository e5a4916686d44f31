//! Booking requests and the in-memory ledger
//!
//! [`resolve_request`] turns a submitted [`BookingCreate`](shared::models::BookingCreate)
//! into a [`BookingRequest`]; [`BookingLedger`] runs the allocator and records
//! the result.

mod ledger;
mod request;

pub use ledger::BookingLedger;
pub use request::{BookingRequest, resolve_request};
