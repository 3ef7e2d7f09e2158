//! Period summary and attendance report models.
//!
//! This module contains the results of the period aggregator: the
//! single-employee [`PeriodSummary`] and the grouped [`AttendanceReport`].
//! Neither is persisted; both are computed on demand.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReportingPeriod;

/// Hours and attendance for one employee over a reporting period.
///
/// Hour totals and the attendance rate are rounded to two decimal places.
/// `days_missed` is `days_expected - days_attended` and goes negative when
/// approved records fall on days that are not expected working days.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PeriodSummary, ReportingPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let summary = PeriodSummary {
///     employee_id: "emp_001".to_string(),
///     period: ReportingPeriod::new(
///         NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     ),
///     total_worked_hours: Decimal::new(3000, 2),
///     total_overtime_hours: Decimal::new(250, 2),
///     days_attended: 5,
///     days_expected: 6,
///     days_missed: 1,
///     attendance_rate: Decimal::new(8333, 2),
/// };
/// assert_eq!(summary.days_missed, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// The period that was summarised.
    pub period: ReportingPeriod,
    /// Sum of worked hours over approved records.
    pub total_worked_hours: Decimal,
    /// Sum of overtime hours over approved records.
    pub total_overtime_hours: Decimal,
    /// Number of approved records in the period.
    pub days_attended: u32,
    /// Number of Monday-to-Saturday dates in the period.
    pub days_expected: u32,
    /// `days_expected - days_attended`, possibly negative.
    pub days_missed: i64,
    /// Attended days as a percentage of expected days, 0 when none are expected.
    pub attendance_rate: Decimal,
}

/// The period section of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First date of the period.
    pub start_date: NaiveDate,
    /// Last date of the period.
    pub end_date: NaiveDate,
    /// Number of expected working days, shared by every employee line.
    pub working_days: u32,
}

/// The filters a report was generated with, echoed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Organisational area filter, if any.
    pub area: Option<String>,
    /// Production unit filter, if any.
    pub production_unit: Option<String>,
}

/// Report-level rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Number of employees in the report, including those with no attendance.
    pub total_employees: u32,
    /// Sum of worked hours across all employees.
    pub total_hours_worked: Decimal,
    /// Sum of overtime hours across all employees.
    pub total_overtime_hours: Decimal,
    /// Mean number of days attended per employee (a day count, not a rate).
    pub average_attendance: Decimal,
}

/// One employee's line in a grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAttendance {
    /// Employee identifier.
    pub employee_id: String,
    /// National identity document number.
    pub national_id: String,
    /// Given names.
    pub first_names: String,
    /// Family names.
    pub last_names: String,
    /// Given and family names.
    pub full_name: String,
    /// Organisational area.
    pub area: String,
    /// Production unit.
    pub production_unit: String,
    /// Worked hours over approved records, 2 decimal places.
    pub hours_worked: Decimal,
    /// Overtime hours over approved records, 2 decimal places.
    pub overtime_hours: Decimal,
    /// Number of approved records in the period.
    pub days_attended: u32,
    /// Expected working days minus days attended, possibly negative.
    pub days_missed: i64,
    /// Attended days as a percentage of expected days.
    pub attendance_rate: Decimal,
}

/// A grouped attendance report across many employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The reporting period and its working days.
    pub period: ReportPeriod,
    /// The area/unit filters applied.
    pub filters: ReportFilters,
    /// Report-level rollups.
    pub totals: ReportTotals,
    /// One line per employee, ordered by employee id.
    pub employees: Vec<EmployeeAttendance>,
}
