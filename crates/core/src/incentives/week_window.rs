//! Monday-to-Sunday window arithmetic on UTC calendar fields.

use chrono::{DateTime, TimeZone, Utc};

use crate::constants::{DAYS_PER_WEEK, WEEK_STARTS_ON};
use crate::errors::Result;
use crate::utils::time_utils::local_to_utc_ignoring_zone;
use crate::utils::CalendarInstant;

use super::incentives_model::WeekWindow;

/// Midnight on the first day of the week containing `instant`.
pub fn start_of_week(instant: CalendarInstant) -> Result<CalendarInstant> {
    let offset = days_since_week_start(instant);
    CalendarInstant::from_date(instant.date()).checked_sub_days(offset)
}

/// Midnight on the last day of the week containing `instant`.
pub fn end_of_week(instant: CalendarInstant) -> Result<CalendarInstant> {
    start_of_week(instant)?.checked_add_days(DAYS_PER_WEEK - 1)
}

fn days_since_week_start(instant: CalendarInstant) -> i64 {
    let weekday = instant.weekday().num_days_from_monday() as i64;
    let start = WEEK_STARTS_ON.num_days_from_monday() as i64;
    (weekday - start).rem_euclid(DAYS_PER_WEEK)
}

/// Window covering the week of `anchor` plus `duration_weeks - 1` following
/// weeks. Callers bound `duration_weeks` first; zero behaves like one.
pub fn week_window(anchor: CalendarInstant, duration_weeks: u32) -> Result<WeekWindow> {
    let extra_weeks = i64::from(duration_weeks.saturating_sub(1));
    let start = start_of_week(anchor)?;
    let end = end_of_week(anchor)?.checked_add_weeks(extra_weeks)?;
    Ok(WeekWindow { start, end })
}

/// [`week_window`] for a value straight from a local-time date picker.
pub fn week_window_from_local<Z: TimeZone>(
    anchor: &DateTime<Z>,
    duration_weeks: u32,
) -> Result<WeekWindow> {
    week_window(local_to_utc_ignoring_zone(anchor), duration_weeks)
}

/// The single week containing `now`.
pub fn current_week_window(now: DateTime<Utc>) -> Result<WeekWindow> {
    week_window(CalendarInstant::from_utc(now), 1)
}
