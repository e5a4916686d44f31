//! Concurrent reservations against one ledger
//!
//! Many threads book random windows on the same restaurant-date; afterwards
//! no table may carry two overlapping bookings.

use std::sync::atomic::{AtomicUsize, Ordering};

use booking_engine::{AllocationStrategy, BookingLedger, BookingRequest, ErrorCode, TimeWindow};
use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use shared::models::{DiningTable, Restaurant, RestaurantCreate};

const THREADS: usize = 8;
const REQUESTS_PER_THREAD: usize = 200;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()
}

fn restaurant() -> Restaurant {
    Restaurant::new(
        42,
        RestaurantCreate {
            name: "Busy Bistro".to_string(),
            description: "Always full on Christmas Eve, book early".to_string(),
            opening_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        },
    )
    .unwrap()
    .with_tables(
        [2, 2, 4, 4, 6, 8]
            .iter()
            .enumerate()
            .map(|(i, &cap)| DiningTable::new(i as i64 + 1, format!("T{}", i + 1), cap).unwrap()),
    )
    .unwrap()
}

/// Random quarter-hour window of 15..=120 minutes between 08:00 and 23:00
fn random_request(rng: &mut impl Rng) -> BookingRequest {
    let length = rng.gen_range(1..=8) * 15;
    let latest_start = 23 * 60 - length;
    let start = rng.gen_range(32..=latest_start / 15) * 15;
    let end = start + length;
    BookingRequest {
        restaurant_id: 42,
        date: date(),
        start_time: NaiveTime::from_hms_opt(start / 60, start % 60, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end / 60, end % 60, 0).unwrap(),
        party_size: rng.gen_range(1..=10),
        optimize: rng.gen_bool(0.5),
    }
}

#[test]
fn test_concurrent_reservations_never_double_book() {
    let r = restaurant();
    let ledger = BookingLedger::new();
    let reserved = AtomicUsize::new(0);
    let rejected = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                let mut rng = rand::thread_rng();
                for _ in 0..REQUESTS_PER_THREAD {
                    let request = random_request(&mut rng);
                    match ledger.reserve(&r, &request, AllocationStrategy::PairOnly) {
                        Ok(_) => reserved.fetch_add(1, Ordering::Relaxed),
                        Err(e) => {
                            assert_eq!(e.code, ErrorCode::NoTablesAvailable);
                            rejected.fetch_add(1, Ordering::Relaxed)
                        }
                    };
                }
            });
        }
    });

    let bookings = ledger.bookings_for(42, date());
    assert_eq!(bookings.len(), reserved.load(Ordering::Relaxed));
    assert_eq!(ledger.len(), bookings.len());
    assert_eq!(
        reserved.load(Ordering::Relaxed) + rejected.load(Ordering::Relaxed),
        THREADS * REQUESTS_PER_THREAD
    );

    for table in r.tables() {
        let mut windows: Vec<TimeWindow> = bookings
            .iter()
            .filter(|b| b.uses_table(table.id))
            .filter_map(TimeWindow::of_booking)
            .collect();
        windows.sort();
        for pair in windows.windows(2) {
            assert!(
                !pair[0].overlaps(&pair[1]),
                "table {} double-booked: {} and {}",
                table.id,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_concurrent_cancel_and_reserve() {
    let r = restaurant();
    let ledger = BookingLedger::new();
    let request = BookingRequest {
        restaurant_id: 42,
        date: date(),
        start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        party_size: 8,
        optimize: false,
    };

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..50 {
                    if let Ok(booking) = ledger.reserve(&r, &request, AllocationStrategy::PairOnly) {
                        assert_eq!(booking.table_ids, vec![6]);
                        ledger.cancel(booking.id).unwrap();
                    }
                }
            });
        }
    });

    assert!(ledger.is_empty());
    assert!(ledger.snapshot(42, date()).is_empty());
}
