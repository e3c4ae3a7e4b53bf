//! Duration input control: parsing, stepping and clamping.
//!
//! The control holds free text. Nothing here fails; input that does not
//! parse as a number counts as the minimum.

use std::str::FromStr;

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::constants::MIN_DURATION_WEEKS;

fn parse_duration(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| parse_out_of_range(trimmed))
}

// Numbers beyond Decimal's range saturate so they still clamp to a bound.
fn parse_out_of_range(value: &str) -> Option<Decimal> {
    let number = value.parse::<f64>().ok().filter(|n| !n.is_nan())?;
    Some(Decimal::from_f64(number).unwrap_or(if number.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }))
}

fn to_weeks(value: Decimal) -> u32 {
    value.floor().to_u32().unwrap_or(MIN_DURATION_WEEKS)
}

/// Steps the duration up by one week.
///
/// Returns `"1"` when the input does not parse or the result would be at
/// most 1, `max_duration` when it would exceed the bound, and
/// `floor(duration) + 1` otherwise.
pub fn increment(duration: &str, max_duration: u32) -> String {
    step(duration, max_duration, Decimal::ONE)
}

/// Steps the duration down by one week, with the same clamping as
/// [`increment`]. A value above a bound that has since shrunk is pulled
/// down to the bound.
pub fn decrement(duration: &str, max_duration: u32) -> String {
    step(duration, max_duration, Decimal::NEGATIVE_ONE)
}

fn step(duration: &str, max_duration: u32, delta: Decimal) -> String {
    let max_duration = max_duration.max(MIN_DURATION_WEEKS);
    let Some(current) = parse_duration(duration) else {
        return MIN_DURATION_WEEKS.to_string();
    };
    let next = current.checked_add(delta).unwrap_or(current);

    if next <= Decimal::from(MIN_DURATION_WEEKS) {
        MIN_DURATION_WEEKS.to_string()
    } else if next > Decimal::from(max_duration) {
        max_duration.to_string()
    } else {
        to_weeks(current.floor() + delta).to_string()
    }
}

/// Whole weeks the text stands for, within `[1, max_duration]`.
pub fn clamp_duration(duration: &str, max_duration: u32) -> u32 {
    let max_duration = max_duration.max(MIN_DURATION_WEEKS);
    match parse_duration(duration) {
        Some(value) if value >= Decimal::from(max_duration) => max_duration,
        Some(value) if value < Decimal::from(MIN_DURATION_WEEKS) => MIN_DURATION_WEEKS,
        Some(value) => to_weeks(value).max(MIN_DURATION_WEEKS),
        None => MIN_DURATION_WEEKS,
    }
}
