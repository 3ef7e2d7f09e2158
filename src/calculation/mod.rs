//! Calculation logic for the attendance engine.
//!
//! This module contains the shift calculator, which turns clock-in and
//! clock-out times into worked and overtime hours, and the period aggregator,
//! which sums approved records, counts expected working days and derives
//! attendance rates for a single employee or a grouped report.

mod period_summary;
mod report;
mod rounding;
mod shift_hours;
mod working_days;

pub use period_summary::summarize_employee;
pub use report::generate_report;
pub use rounding::{REPORT_DECIMAL_PLACES, attendance_rate, round_hours};
pub use shift_hours::{STANDARD_SHIFT_HOURS, ShiftHoursResult, calculate_shift_hours, compute_hours};
pub use working_days::{count_expected_working_days, is_expected_working_day};
