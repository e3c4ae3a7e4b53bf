//! Earliest start date an incentive may be created for.
//!
//! The distribution sweep collects each week on Sunday at 18:00 UTC. An
//! incentive starting the Monday right after a cutoff that has already
//! passed would miss its first collection, so that Monday is skipped.

use chrono::{DateTime, Datelike, NaiveTime, Utc};

use crate::constants::{COLLECTION_HOUR_UTC, COLLECTION_WEEKDAY, DAYS_PER_WEEK, WEEK_STARTS_ON};
use crate::errors::{Result, ScheduleError};
use crate::utils::CalendarInstant;

/// The upcoming collection cutoff, or today's if today is collection day.
pub fn collection_cutoff(now: DateTime<Utc>) -> Result<CalendarInstant> {
    let today = now.date_naive();
    let days_ahead = (i64::from(COLLECTION_WEEKDAY.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(DAYS_PER_WEEK);
    let cutoff_time = NaiveTime::from_hms_opt(COLLECTION_HOUR_UTC, 0, 0).ok_or_else(|| {
        ScheduleError::OutOfRange(format!("collection hour {}", COLLECTION_HOUR_UTC))
    })?;
    CalendarInstant::from_fields(today.and_time(cutoff_time)).checked_add_days(days_ahead)
}

/// Earliest Monday an incentive may start on, given `now`.
pub fn minimum_start_monday(now: DateTime<Utc>) -> Result<CalendarInstant> {
    let cutoff = collection_cutoff(now)?;
    let next_week_start = first_week_start_after(cutoff)?;
    if CalendarInstant::from_utc(now) < cutoff {
        Ok(next_week_start)
    } else {
        next_week_start.checked_add_weeks(1)
    }
}

/// Whether `candidate` is a week start on or after the minimum. Dates
/// before the floor are rejected rather than clamped.
pub fn is_allowed_start(candidate: CalendarInstant, now: DateTime<Utc>) -> Result<bool> {
    if candidate.weekday() != WEEK_STARTS_ON {
        return Ok(false);
    }
    let floor = minimum_start_monday(now)?;
    Ok(candidate.date() >= floor.date())
}

fn first_week_start_after(instant: CalendarInstant) -> Result<CalendarInstant> {
    let day = CalendarInstant::from_date(instant.date());
    let days_ahead = (i64::from(WEEK_STARTS_ON.num_days_from_monday())
        - i64::from(day.weekday().num_days_from_monday()))
    .rem_euclid(DAYS_PER_WEEK);
    // Same weekday means the following week
    let days_ahead = if days_ahead == 0 { DAYS_PER_WEEK } else { days_ahead };
    day.checked_add_days(days_ahead)
}
