use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::models::{BookingCreate, Restaurant};

use crate::availability::TimeWindow;
use crate::core::EngineConfig;
use crate::utils::time::add_minutes;
use crate::utils::{AppError, AppResult, ErrorCode};

/// A validated booking request, ready for the allocator
///
/// `end_time` is already computed and lies inside business hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub restaurant_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub party_size: u32,
    pub optimize: bool,
}

impl BookingRequest {
    /// Half-open interval of the request (`None` if malformed)
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Validate a submitted booking against `restaurant` and compute its end time
///
/// Checks, in order: party size, booking length, start inside business hours
/// and on the slot grid counted from opening, end not past midnight and not
/// past closing.
pub fn resolve_request(
    restaurant: &Restaurant,
    data: BookingCreate,
    config: &EngineConfig,
) -> AppResult<BookingRequest> {
    if data.party_size == 0 {
        return Err(AppError::new(ErrorCode::InvalidPartySize));
    }

    validate_length(data.length_minutes, config)?;

    if data.time < restaurant.opening_time {
        return Err(AppError::new(ErrorCode::OutsideBusinessHours)
            .with_detail("time", data.time.format("%H:%M").to_string()));
    }

    if !is_on_slot_grid(data.time, restaurant.opening_time, config) {
        return Err(AppError::with_message(
            ErrorCode::InvalidBookingWindow,
            format!(
                "Booking must start on a {} minute slot",
                config.slot_interval_minutes
            ),
        )
        .with_detail("time", data.time.format("%H:%M").to_string()));
    }

    let Some(end_time) = add_minutes(data.time, data.length_minutes) else {
        return Err(AppError::with_message(
            ErrorCode::OutsideBusinessHours,
            "Booking cannot run past midnight.",
        ));
    };
    if end_time > restaurant.closing_time {
        return Err(AppError::with_message(
            ErrorCode::OutsideBusinessHours,
            "Booking exceeds restaurant closing time.",
        )
        .with_detail("end_time", end_time.format("%H:%M").to_string()));
    }

    Ok(BookingRequest {
        restaurant_id: restaurant.id,
        date: data.date,
        start_time: data.time,
        end_time,
        party_size: data.party_size,
        optimize: data.optimize,
    })
}

fn validate_length(length_minutes: u32, config: &EngineConfig) -> AppResult<()> {
    if length_minutes == 0 {
        return Err(AppError::new(ErrorCode::InvalidBookingWindow));
    }
    if config.slot_interval_minutes > 0 && length_minutes % config.slot_interval_minutes != 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidBookingWindow,
            format!(
                "Booking length must be a multiple of {} minutes",
                config.slot_interval_minutes
            ),
        )
        .with_detail("length_minutes", length_minutes));
    }
    if length_minutes > config.max_booking_minutes {
        return Err(AppError::new(ErrorCode::BookingTooLong)
            .with_detail("length_minutes", length_minutes)
            .with_detail("max_minutes", config.max_booking_minutes));
    }
    Ok(())
}

/// Whether `time` is a whole number of slot intervals after `opening`
fn is_on_slot_grid(time: NaiveTime, opening: NaiveTime, config: &EngineConfig) -> bool {
    let interval_secs = i64::from(config.slot_interval_minutes) * 60;
    interval_secs == 0 || (time - opening).num_seconds() % interval_secs == 0
}
