pub mod time;
pub mod test_utils;

pub use time::{format_clock, parse_clock, ClockError, MINUTES_PER_DAY};
