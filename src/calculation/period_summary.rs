//! Single-employee period summary.
//!
//! Sums approved shift records for one employee over a reporting period and
//! compares the days attended against the expected working days.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovalState, AttendanceFilter, Employee, PeriodSummary, ReportingPeriod, ShiftRecord,
};

use super::rounding::{attendance_rate, round_hours};

/// Unrounded totals over one employee's approved records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct AttendanceTally {
    pub(crate) worked_hours: Decimal,
    pub(crate) overtime_hours: Decimal,
    pub(crate) days_attended: u32,
}

impl AttendanceTally {
    pub(crate) fn add(&mut self, record: &ShiftRecord) {
        self.worked_hours += record.worked_hours;
        self.overtime_hours += record.overtime_hours;
        self.days_attended += 1;
    }

    pub(crate) fn days_missed(&self, days_expected: u32) -> i64 {
        i64::from(days_expected) - i64::from(self.days_attended)
    }
}

/// Summarises one employee's approved attendance over a period.
///
/// # Arguments
///
/// * `employee_id` - The employee to summarise
/// * `period` - The inclusive reporting period
/// * `employees` - The employee directory used to resolve `employee_id`
/// * `records` - A snapshot of shift records; only this employee's approved
///   records dated inside `period` are counted
///
/// Pending and rejected records are ignored entirely: they neither add hours
/// nor count as absences. A reversed period yields zero expected and zero
/// attended days.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] if `employee_id` is not in
/// `employees`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize_employee;
/// use attendance_engine::models::{Employee, ReportingPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     national_id: "1712345678".to_string(),
///     first_names: "Ana".to_string(),
///     last_names: "Paredes".to_string(),
///     area: "Production".to_string(),
///     position: "Operator".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2022, 5, 5).unwrap(),
///     active: true,
///     production_unit: "JOYGARDENS".to_string(),
/// };
/// let period = ReportingPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
///
/// let summary = summarize_employee("emp_001", period, &[employee], &[]).unwrap();
/// assert_eq!(summary.total_worked_hours, Decimal::ZERO);
/// assert_eq!(summary.days_expected, 6);
/// assert_eq!(summary.days_missed, 6);
/// ```
pub fn summarize_employee(
    employee_id: &str,
    period: ReportingPeriod,
    employees: &[Employee],
    records: &[ShiftRecord],
) -> EngineResult<PeriodSummary> {
    if !employees.iter().any(|e| e.id == employee_id) {
        return Err(EngineError::EmployeeNotFound {
            employee_id: employee_id.to_string(),
        });
    }

    let filter = AttendanceFilter {
        employee_id: Some(employee_id.to_string()),
        approval_state: Some(ApprovalState::Approved),
        period: Some(period),
        include_inactive: true,
        ..Default::default()
    };

    let mut tally = AttendanceTally::default();
    for record in records.iter().filter(|r| filter.matches_record(r)) {
        tally.add(record);
    }

    let days_expected = period.expected_working_days();

    Ok(PeriodSummary {
        employee_id: employee_id.to_string(),
        period,
        total_worked_hours: round_hours(tally.worked_hours),
        total_overtime_hours: round_hours(tally.overtime_hours),
        days_attended: tally.days_attended,
        days_expected,
        days_missed: tally.days_missed(days_expected),
        attendance_rate: attendance_rate(tally.days_attended, days_expected),
    })
}
