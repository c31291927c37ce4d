use chrono::{NaiveTime, Timelike};
use thiserror::Error;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

const END_OF_DAY: &str = "24:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("Invalid time {0:?}: expected HH:MM in 24-hour format")]
    Malformed(String),

    #[error("Minute offset {0} is outside a single day")]
    OutOfRange(i32),
}

/// Parses a 24-hour `HH:MM` (or `HH:MM:SS`) clock string into minutes from midnight.
///
/// `24:00` is accepted as the end of the day so that a window can run until
/// midnight. Seconds, when present, are dropped.
pub fn parse_clock(value: &str) -> Result<i32, ClockError> {
    let trimmed = value.trim();

    if trimmed == END_OF_DAY {
        return Ok(MINUTES_PER_DAY);
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ClockError::Malformed(value.to_string()))?;

    Ok((time.hour() * 60 + time.minute()) as i32)
}

/// Formats minutes from midnight back into `HH:MM`.
pub fn format_clock(minutes: i32) -> Result<String, ClockError> {
    if !(0..=MINUTES_PER_DAY).contains(&minutes) {
        return Err(ClockError::OutOfRange(minutes));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
