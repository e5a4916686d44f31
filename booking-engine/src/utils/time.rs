//! Time helpers - slot enumeration and parsing
//!
//! Nothing here reads the process clock: every function takes the reference
//! times it needs, so slot lists are reproducible.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use shared::models::Restaurant;

use super::{AppError, AppResult};
use crate::core::EngineConfig;

/// Bookable start times for a restaurant
///
/// Steps from `opening` by `interval` while the slot is strictly before
/// `closing - closing_buffer`, leaving the last block before closing free
/// for prep and service.
pub fn booking_slots(
    opening: NaiveTime,
    closing: NaiveTime,
    interval: Duration,
    closing_buffer: Duration,
) -> Vec<NaiveTime> {
    let (last, wrapped) = closing.overflowing_sub_signed(closing_buffer);
    if wrapped != 0 {
        return Vec::new();
    }
    step_until(opening, last, interval)
}

/// [`booking_slots`] for a restaurant under the configured interval and buffer
pub fn restaurant_slots(restaurant: &Restaurant, config: &EngineConfig) -> Vec<NaiveTime> {
    booking_slots(
        restaurant.opening_time,
        restaurant.closing_time,
        config.slot_interval(),
        config.closing_buffer(),
    )
}

/// Every time of day from midnight in `interval` steps (the opening and
/// closing time picker)
pub fn day_slots(interval: Duration) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if interval <= Duration::zero() {
        return slots;
    }
    let mut time = NaiveTime::MIN;
    loop {
        slots.push(time);
        let (next, wrapped) = time.overflowing_add_signed(interval);
        if wrapped != 0 {
            break;
        }
        time = next;
    }
    slots
}

/// Selectable booking lengths: `interval`, `2 * interval`, ... up to `max_length`
pub fn length_options(interval: Duration, max_length: Duration) -> Vec<Duration> {
    let mut options = Vec::new();
    if interval <= Duration::zero() {
        return options;
    }
    let mut length = interval;
    while length <= max_length {
        options.push(length);
        length = length + interval;
    }
    options
}

/// [`length_options`] under the configured interval and maximum
pub fn configured_lengths(config: &EngineConfig) -> Vec<Duration> {
    length_options(config.slot_interval(), config.max_booking_length())
}

/// Years a booking date may be picked from: the reference year and the next
pub fn booking_years(reference: NaiveDate) -> [i32; 2] {
    [reference.year(), reference.year() + 1]
}

/// `time + minutes`, or `None` when the result would pass midnight
pub fn add_minutes(time: NaiveTime, minutes: u32) -> Option<NaiveTime> {
    let (end, wrapped) = time.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    (wrapped == 0).then_some(end)
}

/// Slot label as shown in pickers (HH:MM)
pub fn slot_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse a time string (HH:MM)
pub fn parse_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

fn step_until(from: NaiveTime, until: NaiveTime, interval: Duration) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if interval <= Duration::zero() {
        return slots;
    }
    let mut time = from;
    while time < until {
        slots.push(time);
        let (next, wrapped) = time.overflowing_add_signed(interval);
        if wrapped != 0 {
            break;
        }
        time = next;
    }
    slots
}
