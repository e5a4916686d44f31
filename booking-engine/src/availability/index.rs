use std::collections::HashMap;

use chrono::NaiveDate;
use shared::models::Booking;

use super::TimeWindow;

/// Lookup index `(table_id, date) -> booked windows`, each list sorted by start
///
/// Built eagerly from a materialized booking collection so the filter never
/// has to walk every booking of the day for every table.
#[derive(Debug, Clone, Default)]
pub struct BookingIndex {
    windows: HashMap<(i64, NaiveDate), Vec<TimeWindow>>,
}

impl BookingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        let mut index = Self::new();
        for booking in bookings {
            index.insert(booking);
        }
        index
    }

    /// Record every table of `booking` as busy for its window
    pub fn insert(&mut self, booking: &Booking) {
        let Some(window) = TimeWindow::of_booking(booking) else {
            tracing::warn!(
                booking_id = booking.id,
                start = %booking.start_time,
                end = %booking.end_time,
                "Skipping booking with an empty time window"
            );
            return;
        };

        for &table_id in &booking.table_ids {
            let list = self.windows.entry((table_id, booking.date)).or_default();
            let pos = list.partition_point(|w| *w <= window);
            list.insert(pos, window);
        }
    }

    /// Undo [`BookingIndex::insert`] for a cancelled booking
    pub fn remove(&mut self, booking: &Booking) {
        let Some(window) = TimeWindow::of_booking(booking) else {
            return;
        };

        for &table_id in &booking.table_ids {
            let key = (table_id, booking.date);
            if let Some(list) = self.windows.get_mut(&key) {
                if let Ok(pos) = list.binary_search(&window) {
                    list.remove(pos);
                }
                if list.is_empty() {
                    self.windows.remove(&key);
                }
            }
        }
    }

    /// Booked windows of a table on a date, sorted by start
    pub fn windows(&self, table_id: i64, date: NaiveDate) -> &[TimeWindow] {
        self.windows
            .get(&(table_id, date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether no booked window of the table intersects `window`
    pub fn is_free(&self, table_id: i64, date: NaiveDate, window: TimeWindow) -> bool {
        let booked = self.windows(table_id, date);
        // only windows starting before our end can intersect
        let candidates = booked.partition_point(|w| w.start() < window.end());
        !booked[..candidates].iter().any(|w| w.end() > window.start())
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
