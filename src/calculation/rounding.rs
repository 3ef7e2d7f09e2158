//! Rounding for reported figures.
//!
//! Stored shift hours are never rounded. Hour totals and percentages are
//! rounded to two decimal places only when they are surfaced in a summary or
//! report.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places used for every reported figure.
pub const REPORT_DECIMAL_PLACES: u32 = 2;

/// Rounds a reported figure to exactly two decimal places, halves away from zero.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("7.125").unwrap()).to_string(), "7.13");
/// assert_eq!(round_hours(Decimal::from(6)).to_string(), "6.00");
/// ```
pub fn round_hours(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(REPORT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(REPORT_DECIMAL_PLACES);
    rounded
}

/// Attended days as a percentage of expected days, rounded like hours.
///
/// Returns zero when no days are expected.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::attendance_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(attendance_rate(5, 6), Decimal::from_str("83.33").unwrap());
/// assert_eq!(attendance_rate(3, 0), Decimal::ZERO);
/// ```
pub fn attendance_rate(days_attended: u32, days_expected: u32) -> Decimal {
    if days_expected == 0 {
        return round_hours(Decimal::ZERO);
    }
    round_hours(Decimal::from(days_attended) * Decimal::ONE_HUNDRED / Decimal::from(days_expected))
}
