use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;
use shared_utils::time::{format_clock, parse_clock, ClockError, MINUTES_PER_DAY};

/// A contiguous working range on one weekday, as stored on the staff record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub is_available: bool,
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            is_available: true,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn closed(start: &str, end: &str) -> Self {
        Self {
            is_available: false,
            ..Self::open(start, end)
        }
    }

    /// Start and end as minutes from midnight. Rejects malformed clocks and inverted ranges.
    pub fn bounds(&self) -> Result<(i32, i32), SchedulingError> {
        let start = parse_clock(&self.start)?;
        let end = parse_clock(&self.end)?;

        if start >= end {
            return Err(SchedulingError::InvalidWindow {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        Ok((start, end))
    }
}

/// Weekly working hours keyed by weekday. A missing day has no availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    #[serde(default, alias = "Monday")]
    pub monday: Vec<TimeWindow>,
    #[serde(default, alias = "Tuesday")]
    pub tuesday: Vec<TimeWindow>,
    #[serde(default, alias = "Wednesday")]
    pub wednesday: Vec<TimeWindow>,
    #[serde(default, alias = "Thursday")]
    pub thursday: Vec<TimeWindow>,
    #[serde(default, alias = "Friday")]
    pub friday: Vec<TimeWindow>,
    #[serde(default, alias = "Saturday")]
    pub saturday: Vec<TimeWindow>,
    #[serde(default, alias = "Sunday")]
    pub sunday: Vec<TimeWindow>,
}

impl WeeklyAvailability {
    pub fn windows_for(&self, weekday: Weekday) -> &[TimeWindow] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn windows_for_mut(&mut self, weekday: Weekday) -> &mut Vec<TimeWindow> {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    pub fn with_day(mut self, weekday: Weekday, windows: Vec<TimeWindow>) -> Self {
        *self.windows_for_mut(weekday) = windows;
        self
    }

    pub fn is_available_on(&self, weekday: Weekday) -> bool {
        self.windows_for(weekday).iter().any(|window| window.is_available)
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// An existing appointment, reduced to what slot computation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub staff_id: String,
    pub date: NaiveDate,
    pub start_minute: i32,
    pub duration_minutes: i32,
}

impl Booking {
    pub fn new(staff_id: &str, date: NaiveDate, start_minute: i32, duration_minutes: i32) -> Self {
        Self {
            staff_id: staff_id.to_string(),
            date,
            start_minute,
            duration_minutes,
        }
    }

    /// Builds a booking from a stored `HH:MM` start time and a duration.
    pub fn from_clock(
        staff_id: &str,
        date: NaiveDate,
        start: &str,
        duration_minutes: i32,
    ) -> Result<Self, SchedulingError> {
        let booking = Self::new(staff_id, date, parse_clock(start)?, duration_minutes);
        booking.validate()?;
        Ok(booking)
    }

    /// Builds a booking from stored `HH:MM` start and end times.
    pub fn from_range(
        staff_id: &str,
        date: NaiveDate,
        start: &str,
        end: &str,
    ) -> Result<Self, SchedulingError> {
        let start_minute = parse_clock(start)?;
        let end_minute = parse_clock(end)?;
        let booking = Self::new(staff_id, date, start_minute, end_minute - start_minute);
        booking.validate()?;
        Ok(booking)
    }

    /// May run past midnight; clamps instead of overflowing.
    pub fn end_minute(&self) -> i32 {
        self.start_minute.saturating_add(self.duration_minutes)
    }

    /// A booking must start within its day and last at least a minute.
    pub fn validate(&self) -> Result<(), SchedulingError> {
        if self.duration_minutes <= 0 {
            return Err(SchedulingError::InvalidBooking {
                start_minute: self.start_minute,
                duration_minutes: self.duration_minutes,
            });
        }
        if !(0..MINUTES_PER_DAY).contains(&self.start_minute) {
            return Err(SchedulingError::BookingOutsideDay(self.start_minute));
        }
        Ok(())
    }
}

/// A free start time of fixed length produced by the slot generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSlot {
    pub start_minute: i32,
    pub duration_minutes: i32,
}

impl CandidateSlot {
    pub fn end_minute(&self) -> i32 {
        self.start_minute.saturating_add(self.duration_minutes)
    }

    pub fn label(&self) -> Result<String, SchedulingError> {
        Ok(format_clock(self.start_minute)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQueryRequest {
    pub date: String,
    pub service_duration_minutes: i32,
    #[serde(default)]
    pub availability: WeeklyAvailability,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    pub step_minutes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapQueryRequest {
    pub a_start: String,
    pub a_end: String,
    pub b_start: String,
    pub b_end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    #[error(transparent)]
    InvalidTime(#[from] ClockError),

    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Service duration must not be negative, got {0} minutes")]
    NegativeDuration(i32),

    #[error("Slot step must be positive, got {0} minutes")]
    InvalidStep(i32),

    #[error("Time range {start}-{end} must start before it ends")]
    InvalidWindow { start: String, end: String },

    #[error("Booking at minute {start_minute} must have a positive duration, got {duration_minutes}")]
    InvalidBooking { start_minute: i32, duration_minutes: i32 },

    #[error("Booking start minute {0} is outside 00:00-24:00")]
    BookingOutsideDay(i32),
}

impl From<SchedulingError> for AppError {
    fn from(error: SchedulingError) -> Self {
        AppError::ValidationError(error.to_string())
    }
}
