//! Grouped attendance report.
//!
//! Applies the period-summary rules to every active employee in the filtered
//! set and rolls the results up into report-level totals.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{
    AttendanceFilter, AttendanceReport, Employee, EmployeeAttendance, ReportFilters, ReportPeriod,
    ReportTotals, ReportingPeriod, ShiftRecord,
};

use super::period_summary::AttendanceTally;
use super::rounding::{attendance_rate, round_hours};

/// Generates an attendance report over a period for a set of employees.
///
/// # Arguments
///
/// * `period` - The inclusive reporting period
/// * `filters` - Optional area and production unit filters
/// * `employees` - The employee directory; inactive employees and those not
///   matching `filters` are left out
/// * `records` - A snapshot of shift records; only approved records dated
///   inside `period` are counted
///
/// # Behavior
///
/// - Expected working days are computed once for the period and shared by
///   every employee line.
/// - Employees without approved records still appear, with zero totals.
/// - Report totals sum the unrounded per-employee hours and round once.
/// - `average_attendance` is the mean number of days attended, zero for an
///   empty employee set.
/// - Employee lines are ordered by employee id. An id listed more than once
///   in `employees` yields a single line, taken from its first entry.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::generate_report;
/// use attendance_engine::models::{ReportFilters, ReportingPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = ReportingPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
/// let report = generate_report(period, &ReportFilters::default(), &[], &[]);
///
/// assert_eq!(report.period.working_days, 6);
/// assert_eq!(report.totals.total_employees, 0);
/// assert_eq!(report.totals.average_attendance, Decimal::ZERO);
/// ```
pub fn generate_report(
    period: ReportingPeriod,
    filters: &ReportFilters,
    employees: &[Employee],
    records: &[ShiftRecord],
) -> AttendanceReport {
    let filter = AttendanceFilter::for_report(
        period,
        filters.area.clone(),
        filters.production_unit.clone(),
    );
    let working_days = period.expected_working_days();

    let mut included: Vec<&Employee> = employees
        .iter()
        .filter(|e| filter.matches_employee(e))
        .collect();
    included.sort_by(|a, b| a.id.cmp(&b.id));
    included.dedup_by(|later, earlier| later.id == earlier.id);

    let mut tallies: HashMap<&str, AttendanceTally> = included
        .iter()
        .map(|e| (e.id.as_str(), AttendanceTally::default()))
        .collect();
    for record in records.iter().filter(|r| filter.matches_record(r)) {
        if let Some(tally) = tallies.get_mut(record.employee_id.as_str()) {
            tally.add(record);
        }
    }

    let mut total_worked = Decimal::ZERO;
    let mut total_overtime = Decimal::ZERO;
    let mut total_days_attended: u64 = 0;

    let lines: Vec<EmployeeAttendance> = included
        .iter()
        .map(|employee| {
            let tally = tallies
                .get(employee.id.as_str())
                .copied()
                .unwrap_or_default();
            total_worked += tally.worked_hours;
            total_overtime += tally.overtime_hours;
            total_days_attended += u64::from(tally.days_attended);

            EmployeeAttendance {
                employee_id: employee.id.clone(),
                national_id: employee.national_id.clone(),
                first_names: employee.first_names.clone(),
                last_names: employee.last_names.clone(),
                full_name: employee.full_name(),
                area: employee.area.clone(),
                production_unit: employee.production_unit.clone(),
                hours_worked: round_hours(tally.worked_hours),
                overtime_hours: round_hours(tally.overtime_hours),
                days_attended: tally.days_attended,
                days_missed: tally.days_missed(working_days),
                attendance_rate: attendance_rate(tally.days_attended, working_days),
            }
        })
        .collect();

    let average_attendance = if lines.is_empty() {
        round_hours(Decimal::ZERO)
    } else {
        round_hours(Decimal::from(total_days_attended) / Decimal::from(lines.len() as u64))
    };

    AttendanceReport {
        period: ReportPeriod {
            start_date: period.start_date,
            end_date: period.end_date,
            working_days,
        },
        filters: filters.clone(),
        totals: ReportTotals {
            total_employees: lines.len() as u32,
            total_hours_worked: round_hours(total_worked),
            total_overtime_hours: round_hours(total_overtime),
            average_attendance,
        },
        employees: lines,
    }
}
