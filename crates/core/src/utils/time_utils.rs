use std::fmt;

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;
use crate::errors::{Result, ScheduleError, ValidationError};

/// Wall-clock formats accepted from date pickers, most specific first.
const LOCAL_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// A date-time whose calendar fields are UTC fields.
///
/// Scheduling rules are expressed on UTC calendar fields, while date pickers
/// hand out local-timezone values. Keeping the two as different types means a
/// local value has to pass through [`local_to_utc_ignoring_zone`] before any
/// week arithmetic can touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarInstant(DateTime<Utc>);

impl CalendarInstant {
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Treats `fields` as UTC calendar fields.
    pub fn from_fields(fields: NaiveDateTime) -> Self {
        Self(fields.and_utc())
    }

    /// Midnight (UTC) at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_fields(date.and_time(NaiveTime::MIN))
    }

    pub fn to_utc(self) -> DateTime<Utc> {
        self.0
    }

    pub fn fields(self) -> NaiveDateTime {
        self.0.naive_utc()
    }

    pub fn date(self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_midnight(self) -> bool {
        self.0.num_seconds_from_midnight() == 0 && self.0.nanosecond() == 0
    }

    pub fn checked_add_days(self, days: i64) -> Result<Self> {
        let delta = TimeDelta::try_days(days)
            .ok_or_else(|| ScheduleError::OutOfRange(format!("{} days", days)))?;
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or_else(|| ScheduleError::OutOfRange(format!("{} + {} days", self, days)).into())
    }

    pub fn checked_sub_days(self, days: i64) -> Result<Self> {
        let negated = days
            .checked_neg()
            .ok_or_else(|| ScheduleError::OutOfRange(format!("-{} days", days)))?;
        self.checked_add_days(negated)
    }

    pub fn checked_add_weeks(self, weeks: i64) -> Result<Self> {
        let days = weeks
            .checked_mul(DAYS_PER_WEEK)
            .ok_or_else(|| ScheduleError::OutOfRange(format!("{} weeks", weeks)))?;
        self.checked_add_days(days)
    }
}

impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

/// Reads the wall-clock fields of `date` as shown in its own timezone and
/// returns them reinterpreted as UTC fields.
///
/// The absolute instant changes whenever the local offset is non-zero. That
/// is the point: the calendar fields, not the instant, drive scheduling.
pub fn local_to_utc_ignoring_zone<Z: TimeZone>(date: &DateTime<Z>) -> CalendarInstant {
    CalendarInstant::from_fields(date.naive_local())
}

/// Builds a `tz`-local date-time carrying the same calendar fields as
/// `instant`. Used only to feed values back into a picker widget.
///
/// A wall-clock time skipped by a DST transition is pushed forward past the
/// gap; an ambiguous one resolves to the earlier instant.
pub fn utc_ignoring_zone_to_local<Z: TimeZone>(instant: CalendarInstant, tz: &Z) -> DateTime<Z> {
    let fields = instant.fields();
    match tz.from_local_datetime(&fields) {
        LocalResult::Single(local) => local,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Use the offset in force before the gap.
            let before = fields
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(fields);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            let utc = fields
                .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc() as i64))
                .unwrap_or(fields);
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Parses an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimezone(name.to_string()).into())
}

/// Parses the wall-clock value a date picker submits. A bare date means
/// local midnight.
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    let mut last_err = None;
    for format in LOCAL_DATETIME_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, format) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => last_err = Some(e),
        }
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
        Err(e) => Err(last_err.unwrap_or(e).into()),
    }
}

/// Resolves picker fields in `tz` and crosses the normalization boundary.
pub fn normalize_picker_value(fields: NaiveDateTime, tz: &Tz) -> CalendarInstant {
    let local = utc_ignoring_zone_to_local(CalendarInstant::from_fields(fields), tz);
    local_to_utc_ignoring_zone(&local)
}
