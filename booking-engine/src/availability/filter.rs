use chrono::{NaiveDate, NaiveTime};
use shared::models::{Booking, DiningTable, Restaurant};
use tracing::debug;

use super::{BookingIndex, TimeWindow};

/// Tables of `restaurant` with no booking on `date` intersecting
/// `[start_time, end_time)`
///
/// `bookings` is the materialized collection supplied by the caller; entries
/// for other restaurants or other dates are ignored. Business-hour bounds are
/// not checked here. An empty window (`start_time >= end_time`) yields no
/// tables. Result is ordered by table id.
pub fn available_tables(
    restaurant: &Restaurant,
    bookings: &[Booking],
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Vec<DiningTable> {
    let Some(window) = TimeWindow::new(start_time, end_time) else {
        debug!(
            restaurant_id = restaurant.id,
            start = %start_time,
            end = %end_time,
            "Empty request window, no tables available"
        );
        return Vec::new();
    };

    let index = BookingIndex::from_bookings(
        bookings
            .iter()
            .filter(|b| b.restaurant_id == restaurant.id && b.date == date),
    );
    available_tables_indexed(restaurant, &index, date, window)
}

/// Same as [`available_tables`] against a prebuilt index
pub fn available_tables_indexed(
    restaurant: &Restaurant,
    index: &BookingIndex,
    date: NaiveDate,
    window: TimeWindow,
) -> Vec<DiningTable> {
    let free: Vec<DiningTable> = restaurant
        .tables()
        .iter()
        .filter(|table| index.is_free(table.id, date, window))
        .cloned()
        .collect();

    debug!(
        restaurant_id = restaurant.id,
        %date,
        %window,
        total = restaurant.tables().len(),
        free = free.len(),
        "Availability computed"
    );
    free
}
