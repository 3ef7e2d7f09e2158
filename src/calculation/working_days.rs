//! Working-day calendar.
//!
//! The work week runs Monday through Saturday; Sunday is the only rest day.
//! There are no holiday exclusions.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Monday through Saturday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_expected_working_day;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday, 2026-01-18 a Sunday
/// assert!(is_expected_working_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// assert!(!is_expected_working_day(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
/// ```
pub fn is_expected_working_day(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sun
}

/// Counts the expected working days in `[start_date, end_date]`.
///
/// A reversed range (`start_date > end_date`) counts zero days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::count_expected_working_days;
/// use chrono::NaiveDate;
///
/// // Monday 2026-01-12 to Sunday 2026-01-18
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(count_expected_working_days(start, end), 6);
/// assert_eq!(count_expected_working_days(end, start), 0);
/// ```
pub fn count_expected_working_days(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    if start_date > end_date {
        return 0;
    }

    let total_days = (end_date - start_date).num_days() + 1;
    let full_weeks = total_days / 7;
    let first_weekday = i64::from(start_date.weekday().num_days_from_monday());

    // Each full week holds exactly one Sunday; the leftover days start on
    // `start_date`'s weekday and cover at most one more.
    let remainder_sundays = (0..total_days % 7)
        .filter(|offset| (first_weekday + offset) % 7 == 6)
        .count() as i64;

    (full_weeks * 6 + total_days % 7 - remainder_sundays) as u32
}
