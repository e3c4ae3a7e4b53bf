use chrono::Weekday;

/// First day of an incentive week.
pub const WEEK_STARTS_ON: Weekday = Weekday::Mon;

/// Weekday on which the distribution sweep collects the current week.
pub const COLLECTION_WEEKDAY: Weekday = Weekday::Sun;

/// UTC hour of the weekly collection.
pub const COLLECTION_HOUR_UTC: u32 = 18;

/// Days subtracted from a week's Monday to get a payment's effective date.
/// Must track the network's weekly accounting boundary.
pub const EFFECTIVE_DATE_OFFSET_DAYS: i64 = 1;

/// Shortest allowed incentive, in weeks
pub const MIN_DURATION_WEEKS: u32 = 1;

/// Longest incentive a hardware signer can authorize in one transaction.
pub const HARDWARE_SIGNER_MAX_DURATION_WEEKS: u32 = 5;

/// Longest incentive for every other signer.
pub const DEFAULT_MAX_DURATION_WEEKS: u32 = 100;

pub const DAYS_PER_WEEK: i64 = 7;
