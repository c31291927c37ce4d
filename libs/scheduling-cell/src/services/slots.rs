use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use shared_config::SlotPolicy;
use shared_utils::time::MINUTES_PER_DAY;

use crate::models::{Booking, CandidateSlot, SchedulingError, WeeklyAvailability, weekday_name};
use crate::services::overlap::slot_conflicts_with;

/// Walks a staff member's working windows for one date and keeps the start
/// times that do not collide with an existing booking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotGenerator {
    policy: SlotPolicy,
}

impl SlotGenerator {
    pub fn new(policy: SlotPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    /// Free start times for `date` as `HH:MM` labels.
    ///
    /// `existing_bookings` are expected to already be narrowed to the same
    /// staff member and date.
    pub fn generate_slots(
        &self,
        availability: &WeeklyAvailability,
        existing_bookings: &[Booking],
        service_duration_minutes: i32,
        date: &str,
    ) -> Result<Vec<String>, SchedulingError> {
        let date = parse_date(date)?;

        self.generate_candidate_slots(availability, existing_bookings, service_duration_minutes, date)?
            .iter()
            .map(CandidateSlot::label)
            .collect()
    }

    pub fn generate_candidate_slots(
        &self,
        availability: &WeeklyAvailability,
        existing_bookings: &[Booking],
        service_duration_minutes: i32,
        date: NaiveDate,
    ) -> Result<Vec<CandidateSlot>, SchedulingError> {
        let step = self.policy.step_minutes;
        if step <= 0 {
            return Err(SchedulingError::InvalidStep(step));
        }
        if service_duration_minutes < 0 {
            return Err(SchedulingError::NegativeDuration(service_duration_minutes));
        }
        for booking in existing_bookings {
            booking.validate()?;
        }

        let weekday = date.weekday();
        let windows = availability.windows_for(weekday);

        debug!(
            "Generating {} minute slots on {} ({}) across {} windows with {} bookings",
            service_duration_minutes,
            date,
            weekday_name(weekday),
            windows.len(),
            existing_bookings.len()
        );

        // Parse everything up front so a bad clock string fails even when no slot fits.
        let bounds = windows
            .iter()
            .filter(|window| window.is_available)
            .map(|window| window.bounds())
            .collect::<Result<Vec<_>, _>>()?;

        if service_duration_minutes == 0 || service_duration_minutes > MINUTES_PER_DAY {
            return Ok(vec![]);
        }

        let mut seen = HashSet::new();
        let mut slots = Vec::new();

        for (window_start, window_end) in bounds {
            let mut start = window_start;

            while start
                .checked_add(service_duration_minutes)
                .is_some_and(|end| end <= window_end)
            {
                let candidate = CandidateSlot {
                    start_minute: start,
                    duration_minutes: service_duration_minutes,
                };

                let blocked = existing_bookings
                    .iter()
                    .any(|booking| slot_conflicts_with(&candidate, booking));

                if !blocked && seen.insert(start) {
                    slots.push(candidate);
                }

                start = match start.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        debug!("Found {} available slots on {}", slots.len(), date);
        Ok(slots)
    }
}

/// Free start times with the default 15 minute granularity.
pub fn generate_slots(
    availability: &WeeklyAvailability,
    existing_bookings: &[Booking],
    service_duration_minutes: i32,
    date: &str,
) -> Result<Vec<String>, SchedulingError> {
    SlotGenerator::default().generate_slots(availability, existing_bookings, service_duration_minutes, date)
}

pub fn parse_date(date: &str) -> Result<NaiveDate, SchedulingError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| SchedulingError::InvalidDate(date.to_string()))
}
