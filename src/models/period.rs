//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] type: the inclusive date range
//! over which attendance is summarised.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::count_expected_working_days;

/// An inclusive range of calendar dates.
///
/// A period whose start is after its end is treated as empty: it contains no
/// dates and has no expected working days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert_eq!(period.expected_working_days(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a new period. Reversed bounds are kept as given.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::ReportingPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportingPeriod::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
    /// );
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the start date is after the end date.
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Number of Monday-to-Saturday dates in the period.
    pub fn expected_working_days(&self) -> u32 {
        count_expected_working_days(self.start_date, self.end_date)
    }
}
