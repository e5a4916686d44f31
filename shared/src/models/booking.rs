//! Booking Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Restaurant;

/// A confirmed booking holding one or more tables of one restaurant
///
/// Only created once the allocator has returned a non-empty table set, so
/// `table_ids` is never empty and `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub restaurant_id: i64,
    pub party_size: u32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Exclusive end of the booking
    pub end_time: NaiveTime,
    /// Assigned tables, ascending by id
    pub table_ids: Vec<i64>,
    /// Unix millis
    pub created_at: i64,
}

impl Booking {
    pub fn uses_table(&self, table_id: i64) -> bool {
        self.table_ids.contains(&table_id)
    }

    /// Seats provided by the assigned tables of `restaurant`
    pub fn seats(&self, restaurant: &Restaurant) -> u32 {
        self.table_ids
            .iter()
            .filter_map(|id| restaurant.table(*id))
            .map(|t| t.capacity)
            .sum()
    }
}

/// Booking payload as submitted by the form layer
///
/// Carries a start time plus a length rather than an end time; the
/// validation layer turns it into a well-typed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub length_minutes: u32,
    pub party_size: u32,
    /// Allow combining tables or seating at a bigger table
    #[serde(default)]
    pub optimize: bool,
}
