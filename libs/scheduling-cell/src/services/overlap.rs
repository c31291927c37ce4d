use shared_utils::time::parse_clock;

use crate::models::{Booking, CandidateSlot, SchedulingError};

/// Half-open interval intersection on minutes from midnight.
///
/// `[a_start, a_end)` and `[b_start, b_end)` overlap only when they share at
/// least one minute, so back-to-back ranges never collide.
pub fn overlaps(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && a_end > b_start
}

pub fn slot_conflicts_with(slot: &CandidateSlot, booking: &Booking) -> bool {
    overlaps(
        slot.start_minute,
        slot.end_minute(),
        booking.start_minute,
        booking.end_minute(),
    )
}

/// Parses an `HH:MM` pair into a non-empty half-open range.
pub fn clock_interval(start: &str, end: &str) -> Result<(i32, i32), SchedulingError> {
    let start_minute = parse_clock(start)?;
    let end_minute = parse_clock(end)?;

    if start_minute >= end_minute {
        return Err(SchedulingError::InvalidWindow {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok((start_minute, end_minute))
}

/// Overlap check for `HH:MM` ranges, as used when a caller only holds stored clock strings.
pub fn clock_ranges_overlap(
    a_start: &str,
    a_end: &str,
    b_start: &str,
    b_end: &str,
) -> Result<bool, SchedulingError> {
    let (a_start, a_end) = clock_interval(a_start, a_end)?;
    let (b_start, b_end) = clock_interval(b_start, b_end)?;
    Ok(overlaps(a_start, a_end, b_start, b_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        assert!(!overlaps(9 * 60, 10 * 60, 10 * 60, 11 * 60));
        assert!(!overlaps(10 * 60, 11 * 60, 9 * 60, 10 * 60));
    }

    #[test]
    fn test_partial_and_nested_overlap() {
        assert!(overlaps(9 * 60, 10 * 60, 9 * 60 + 30, 10 * 60 + 30));
        assert!(overlaps(9 * 60, 12 * 60, 10 * 60, 11 * 60));
        assert!(overlaps(10 * 60, 11 * 60, 9 * 60, 12 * 60));
        assert!(overlaps(9 * 60, 10 * 60, 9 * 60, 10 * 60));
    }

    #[test]
    fn test_clock_ranges_overlap() {
        assert_eq!(clock_ranges_overlap("09:00", "10:00", "10:00", "11:00"), Ok(false));
        assert_eq!(clock_ranges_overlap("09:00", "10:00", "09:59", "10:30"), Ok(true));
        assert!(matches!(
            clock_ranges_overlap("10:00", "09:00", "09:00", "10:00"),
            Err(SchedulingError::InvalidWindow { .. })
        ));
    }
}
