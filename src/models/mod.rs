//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod filter;
mod period;
mod report;
mod shift_record;

pub use audit::AuditStep;
pub use employee::{Employee, ensure_unique_employees};
pub use filter::AttendanceFilter;
pub use period::ReportingPeriod;
pub use report::{
    AttendanceReport, EmployeeAttendance, PeriodSummary, ReportFilters, ReportPeriod, ReportTotals,
};
pub use shift_record::{ApprovalState, ReviewDecision, ShiftRecord, ensure_unique_records};
