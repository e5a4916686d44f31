use shared::models::{Booking, Restaurant};
use tracing::{debug, info};

use super::{Allocation, AllocationStrategy, select_tables_with};
use crate::availability::{BookingIndex, available_tables_indexed};
use crate::booking::BookingRequest;

/// Filter then optimize: the tables a new booking should get, if any
///
/// `bookings` may hold other restaurants and dates; only those matching the
/// request are considered.
pub fn find_tables(
    restaurant: &Restaurant,
    bookings: &[Booking],
    request: &BookingRequest,
    strategy: AllocationStrategy,
) -> Option<Allocation> {
    let index = BookingIndex::from_bookings(
        bookings
            .iter()
            .filter(|b| b.restaurant_id == restaurant.id && b.date == request.date),
    );
    find_tables_indexed(restaurant, &index, request, strategy)
}

/// [`find_tables`] against a prebuilt index
pub fn find_tables_indexed(
    restaurant: &Restaurant,
    index: &BookingIndex,
    request: &BookingRequest,
    strategy: AllocationStrategy,
) -> Option<Allocation> {
    let Some(window) = request.window() else {
        debug!(
            restaurant_id = restaurant.id,
            start = %request.start_time,
            end = %request.end_time,
            "[Allocate] Empty window, nothing to allocate"
        );
        return None;
    };

    let available = available_tables_indexed(restaurant, index, request.date, window);
    let allocation =
        select_tables_with(&available, request.party_size, request.optimize, strategy);

    match &allocation {
        Some(found) => info!(
            restaurant_id = restaurant.id,
            date = %request.date,
            %window,
            party_size = request.party_size,
            tables = ?found.table_ids(),
            seats = found.seats(),
            kind = ?found.kind,
            "[Allocate] Tables selected"
        ),
        None => info!(
            restaurant_id = restaurant.id,
            date = %request.date,
            %window,
            party_size = request.party_size,
            optimize = request.optimize,
            available = available.len(),
            "[Allocate] No suitable tables"
        ),
    }
    allocation
}
