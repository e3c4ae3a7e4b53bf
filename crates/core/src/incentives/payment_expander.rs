use rust_decimal::Decimal;

use crate::constants::EFFECTIVE_DATE_OFFSET_DAYS;
use crate::errors::{Result, ScheduleError};
use crate::utils::CalendarInstant;

use super::incentives_model::ScheduledPayment;

/// Expands an incentive into one payment per week, in week order.
///
/// Each payment takes effect on the day before its week starts, which is
/// where the network closes its weekly books. The entries become operations
/// of a single transaction, so the order is kept as generated.
pub fn expand_weekly_operations(
    start_date: CalendarInstant,
    weekly_amount: Decimal,
    duration_weeks: i64,
) -> Result<Vec<ScheduledPayment>> {
    if duration_weeks < 1 {
        return Ok(Vec::new());
    }
    let week_count = u32::try_from(duration_weeks)
        .map_err(|_| ScheduleError::OutOfRange(format!("{} weeks", duration_weeks)))?;
    let first_effective = start_date.checked_sub_days(EFFECTIVE_DATE_OFFSET_DAYS)?;

    (0..week_count)
        .map(|week_index| {
            Ok(ScheduledPayment {
                week_index,
                effective_date: first_effective.checked_add_weeks(i64::from(week_index))?,
                amount: weekly_amount,
            })
        })
        .collect()
}
