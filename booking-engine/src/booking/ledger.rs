use std::collections::BTreeMap;

use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::models::{Booking, Restaurant};
use shared::util::{now_millis, snowflake_id};
use tracing::{info, warn};

use super::BookingRequest;
use crate::allocation::{AllocationStrategy, find_tables_indexed};
use crate::availability::BookingIndex;
use crate::utils::{AppError, AppResult, ErrorCode};

type DayKey = (i64, NaiveDate);

/// Bookings of one restaurant on one date plus their lookup index
#[derive(Debug, Default)]
struct DayBook {
    bookings: BTreeMap<i64, Booking>,
    index: BookingIndex,
}

impl DayBook {
    fn record(&mut self, booking: Booking) {
        self.index.insert(&booking);
        self.bookings.insert(booking.id, booking);
    }
}

/// In-memory booking store
///
/// Every restaurant-date lives behind its own map entry. [`BookingLedger::reserve`]
/// and [`BookingLedger::commit`] hold that entry for the whole
/// check-then-write sequence, so two concurrent requests for the same
/// restaurant and date are serialized and can never share a table.
#[derive(Debug, Default)]
pub struct BookingLedger {
    days: DashMap<DayKey, DayBook>,
    /// booking id -> day it lives in
    locations: DashMap<i64, DayKey>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate tables for `request` and record the booking
    ///
    /// Fails with [`ErrorCode::RestaurantHasNoTables`] for an empty inventory
    /// and [`ErrorCode::NoTablesAvailable`] when the allocator finds nothing.
    pub fn reserve(
        &self,
        restaurant: &Restaurant,
        request: &BookingRequest,
        strategy: AllocationStrategy,
    ) -> AppResult<Booking> {
        ensure_same_restaurant(restaurant, request)?;
        if restaurant.tables().is_empty() {
            return Err(AppError::new(ErrorCode::RestaurantHasNoTables)
                .with_detail("restaurant_id", restaurant.id));
        }

        let key = (restaurant.id, request.date);
        let booking = self.write_day(key, |index| {
            let allocation = find_tables_indexed(restaurant, index, request, strategy)
                .ok_or_else(AppError::no_tables_available)?;
            Ok(self.new_booking(key, request, allocation.table_ids()))
        })?;

        info!(
            booking_id = booking.id,
            restaurant_id = booking.restaurant_id,
            date = %booking.date,
            tables = ?booking.table_ids,
            "[Ledger] Booking reserved"
        );
        Ok(booking)
    }

    /// Record a booking on tables chosen by the caller
    ///
    /// The tables are re-checked against the stored bookings under the
    /// restaurant-date lock.
    pub fn commit(
        &self,
        restaurant: &Restaurant,
        request: &BookingRequest,
        table_ids: &[i64],
    ) -> AppResult<Booking> {
        ensure_same_restaurant(restaurant, request)?;
        let window = request
            .window()
            .ok_or_else(|| AppError::new(ErrorCode::InvalidBookingWindow))?;

        let mut table_ids = table_ids.to_vec();
        table_ids.sort_unstable();
        table_ids.dedup();
        if table_ids.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "At least one table is required",
            ));
        }
        if let Some(&missing) = table_ids.iter().find(|id| restaurant.table(**id).is_none()) {
            return Err(AppError::table_not_found(missing));
        }

        let key = (restaurant.id, request.date);
        let booking = self.write_day(key, |index| {
            if let Some(&taken) = table_ids
                .iter()
                .find(|id| !index.is_free(**id, request.date, window))
            {
                warn!(
                    restaurant_id = restaurant.id,
                    table_id = taken,
                    %window,
                    "[Ledger] Commit rejected, table already booked"
                );
                return Err(AppError::table_conflict(taken));
            }
            Ok(self.new_booking(key, request, table_ids))
        })?;

        info!(
            booking_id = booking.id,
            restaurant_id = booking.restaurant_id,
            tables = ?booking.table_ids,
            "[Ledger] Booking committed"
        );
        Ok(booking)
    }

    /// Remove a booking and free its tables
    pub fn cancel(&self, booking_id: i64) -> AppResult<Booking> {
        let (_, key) = self
            .locations
            .remove(&booking_id)
            .ok_or_else(|| AppError::booking_not_found(booking_id))?;

        let booking = {
            let mut day = self
                .days
                .get_mut(&key)
                .ok_or_else(|| AppError::booking_not_found(booking_id))?;
            let booking = day
                .bookings
                .remove(&booking_id)
                .ok_or_else(|| AppError::booking_not_found(booking_id))?;
            day.index.remove(&booking);
            booking
        };
        self.days.remove_if(&key, |_, day| day.bookings.is_empty());

        info!(booking_id, restaurant_id = key.0, date = %key.1, "[Ledger] Booking cancelled");
        Ok(booking)
    }

    pub fn get(&self, booking_id: i64) -> Option<Booking> {
        let key = *self.locations.get(&booking_id)?;
        self.days.get(&key)?.bookings.get(&booking_id).cloned()
    }

    /// Bookings of a restaurant on a date, ordered by start time then id
    pub fn bookings_for(&self, restaurant_id: i64, date: NaiveDate) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .days
            .get(&(restaurant_id, date))
            .map(|day| day.bookings.values().cloned().collect())
            .unwrap_or_default();
        bookings.sort_by_key(|b| (b.start_time, b.id));
        bookings
    }

    /// Copy of the lookup index for a restaurant-date
    pub fn snapshot(&self, restaurant_id: i64, date: NaiveDate) -> BookingIndex {
        self.days
            .get(&(restaurant_id, date))
            .map(|day| day.index.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Run `build` against the day's index while holding the restaurant-date
    /// entry and store the booking it returns. A failed build leaves no
    /// entry behind.
    fn write_day(
        &self,
        key: DayKey,
        build: impl FnOnce(&BookingIndex) -> AppResult<Booking>,
    ) -> AppResult<Booking> {
        match self.days.entry(key) {
            Entry::Occupied(mut day) => {
                let booking = build(&day.get().index)?;
                day.get_mut().record(booking.clone());
                Ok(booking)
            }
            Entry::Vacant(slot) => {
                let booking = build(&BookingIndex::default())?;
                slot.insert(DayBook::default()).record(booking.clone());
                Ok(booking)
            }
        }
    }

    fn new_booking(&self, key: DayKey, request: &BookingRequest, table_ids: Vec<i64>) -> Booking {
        Booking {
            id: self.next_id(key),
            restaurant_id: request.restaurant_id,
            party_size: request.party_size,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            table_ids,
            created_at: now_millis(),
        }
    }

    /// Claim an unused booking id for `key`
    fn next_id(&self, key: DayKey) -> i64 {
        loop {
            if let Entry::Vacant(slot) = self.locations.entry(snowflake_id()) {
                let id = *slot.key();
                slot.insert(key);
                return id;
            }
        }
    }
}

fn ensure_same_restaurant(restaurant: &Restaurant, request: &BookingRequest) -> AppResult<()> {
    if request.restaurant_id != restaurant.id {
        return Err(AppError::invalid(format!(
            "Request is for restaurant {}, not {}",
            request.restaurant_id, restaurant.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shared::models::{DiningTable, RestaurantCreate};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn restaurant() -> Restaurant {
        Restaurant::new(
            3,
            RestaurantCreate {
                name: "Little Saigon".to_string(),
                description: "Street food classics and noodle soups".to_string(),
                opening_time: hm(8, 0),
                closing_time: hm(23, 0),
            },
        )
        .unwrap()
        .with_tables([
            DiningTable::new(1, "T1", 2).unwrap(),
            DiningTable::new(2, "T2", 4).unwrap(),
        ])
        .unwrap()
    }

    fn request(start: NaiveTime, end: NaiveTime, party_size: u32) -> BookingRequest {
        BookingRequest {
            restaurant_id: 3,
            date: date(),
            start_time: start,
            end_time: end,
            party_size,
            optimize: false,
        }
    }

    #[test]
    fn test_reserve_then_reject_overlap() {
        let ledger = BookingLedger::new();
        let r = restaurant();

        let booking = ledger
            .reserve(&r, &request(hm(10, 0), hm(11, 0), 4), AllocationStrategy::PairOnly)
            .unwrap();
        assert_eq!(booking.table_ids, vec![2]);
        assert_eq!(ledger.len(), 1);

        let err = ledger
            .reserve(&r, &request(hm(10, 30), hm(11, 30), 4), AllocationStrategy::PairOnly)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoTablesAvailable);
        assert_eq!(err.message, "No tables available for this time.");
    }

    #[test]
    fn test_back_to_back_bookings() {
        let ledger = BookingLedger::new();
        let r = restaurant();
        ledger
            .reserve(&r, &request(hm(10, 0), hm(11, 0), 4), AllocationStrategy::PairOnly)
            .unwrap();
        let next = ledger
            .reserve(&r, &request(hm(11, 0), hm(12, 0), 4), AllocationStrategy::PairOnly)
            .unwrap();
        assert_eq!(next.table_ids, vec![2]);
        assert_eq!(ledger.bookings_for(3, date()).len(), 2);
    }

    #[test]
    fn test_cancel_frees_tables() {
        let ledger = BookingLedger::new();
        let r = restaurant();
        let booking = ledger
            .reserve(&r, &request(hm(10, 0), hm(11, 0), 4), AllocationStrategy::PairOnly)
            .unwrap();

        let cancelled = ledger.cancel(booking.id).unwrap();
        assert_eq!(cancelled, booking);
        assert!(ledger.is_empty());
        assert!(ledger.get(booking.id).is_none());
        assert!(ledger.snapshot(3, date()).is_empty());

        let err = ledger.cancel(booking.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);

        assert!(
            ledger
                .reserve(&r, &request(hm(10, 0), hm(11, 0), 4), AllocationStrategy::PairOnly)
                .is_ok()
        );
    }

    #[test]
    fn test_commit_revalidates_tables() {
        let ledger = BookingLedger::new();
        let r = restaurant();
        let first = ledger
            .commit(&r, &request(hm(10, 0), hm(11, 0), 6), &[2, 1, 2])
            .unwrap();
        assert_eq!(first.table_ids, vec![1, 2]);
        assert_eq!(ledger.get(first.id), Some(first.clone()));

        let err = ledger
            .commit(&r, &request(hm(10, 45), hm(11, 15), 2), &[1])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableConflict);

        let err = ledger
            .commit(&r, &request(hm(12, 0), hm(13, 0), 2), &[9])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);

        let err = ledger
            .commit(&r, &request(hm(12, 0), hm(13, 0), 2), &[])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_failed_writes_leave_no_day_behind() {
        let ledger = BookingLedger::new();
        let r = restaurant();

        for offset in 0..50 {
            let mut req = request(hm(10, 0), hm(11, 0), 20);
            req.date = date() + chrono::Duration::days(offset);
            let err = ledger
                .reserve(&r, &req, AllocationStrategy::PairOnly)
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::NoTablesAvailable);
        }
        assert_eq!(ledger.days.len(), 0);

        let booking = ledger
            .commit(&r, &request(hm(10, 0), hm(11, 0), 2), &[1])
            .unwrap();
        let mut next_day = request(hm(10, 30), hm(11, 30), 2);
        next_day.date = date().succ_opt().unwrap();
        ledger.commit(&r, &next_day, &[1]).unwrap();
        assert_eq!(ledger.days.len(), 2);

        ledger.cancel(booking.id).unwrap();
        assert_eq!(ledger.days.len(), 1);
        assert!(ledger.bookings_for(3, date()).is_empty());
    }

    #[test]
    fn test_restaurant_without_tables() {
        let ledger = BookingLedger::new();
        let mut r = restaurant();
        r.remove_table(1).unwrap();
        r.remove_table(2).unwrap();

        let err = ledger
            .reserve(&r, &request(hm(10, 0), hm(11, 0), 2), AllocationStrategy::PairOnly)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantHasNoTables);
        assert_eq!(ledger.days.len(), 0);
    }

    #[test]
    fn test_wrong_restaurant_rejected() {
        let ledger = BookingLedger::new();
        let mut req = request(hm(10, 0), hm(11, 0), 2);
        req.restaurant_id = 99;
        let err = ledger
            .reserve(&restaurant(), &req, AllocationStrategy::PairOnly)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_snapshot_reflects_bookings() {
        let ledger = BookingLedger::new();
        let r = restaurant();
        ledger
            .reserve(&r, &request(hm(18, 0), hm(20, 0), 2), AllocationStrategy::PairOnly)
            .unwrap();
        let index = ledger.snapshot(3, date());
        assert_eq!(index.windows(1, date()).len(), 1);
        assert!(index.windows(2, date()).is_empty());
    }
}
