//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report to its callers.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ApprovalState;

/// The main error type for the attendance engine.
///
/// Missing clock times, reversed reporting periods and empty employee sets are
/// not errors: they produce zero-valued results instead.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The employee reference does not resolve to a known employee.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The unknown employee identifier.
        employee_id: String,
    },

    /// The employee exists but is no longer active.
    #[error("Employee '{employee_id}' is inactive")]
    InactiveEmployee {
        /// The inactive employee identifier.
        employee_id: String,
    },

    /// No shift record exists for the employee on the given date.
    #[error("No shift record for employee '{employee_id}' on {date}")]
    RecordNotFound {
        /// The employee identifier.
        employee_id: String,
        /// The calendar date that was looked up.
        date: NaiveDate,
    },

    /// A second shift record was supplied for the same employee and date.
    #[error("Duplicate shift record for employee '{employee_id}' on {date}")]
    DuplicateRecord {
        /// The employee identifier.
        employee_id: String,
        /// The calendar date with more than one record.
        date: NaiveDate,
    },

    /// The employee directory lists the same employee id more than once.
    #[error("Duplicate employee '{employee_id}' in employee directory")]
    DuplicateEmployee {
        /// The repeated employee identifier.
        employee_id: String,
    },

    /// A shift record operation was attempted in an invalid state.
    #[error("Invalid shift record for employee '{employee_id}' on {date}: {message}")]
    InvalidRecord {
        /// The employee identifier.
        employee_id: String,
        /// The calendar date of the record.
        date: NaiveDate,
        /// A description of what made the operation invalid.
        message: String,
    },

    /// The record has already left the `Pending` state.
    #[error("Shift record for employee '{employee_id}' on {date} was already reviewed ({state})")]
    AlreadyReviewed {
        /// The employee identifier.
        employee_id: String,
        /// The calendar date of the record.
        date: NaiveDate,
        /// The state the record is currently in.
        state: ApprovalState,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "shift.standard_hours".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'shift.standard_hours': must be greater than zero"
        );
    }

    #[test]
    fn test_duplicate_record_displays_employee_and_date() {
        let error = EngineError::DuplicateRecord {
            employee_id: "emp_001".to_string(),
            date: date(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate shift record for employee 'emp_001' on 2026-01-15"
        );
    }

    #[test]
    fn test_already_reviewed_displays_state() {
        let error = EngineError::AlreadyReviewed {
            employee_id: "emp_001".to_string(),
            date: date(),
            state: ApprovalState::Rejected,
        };
        assert_eq!(
            error.to_string(),
            "Shift record for employee 'emp_001' on 2026-01-15 was already reviewed (Rejected)"
        );
    }

    #[test]
    fn test_invalid_record_displays_message() {
        let error = EngineError::InvalidRecord {
            employee_id: "emp_001".to_string(),
            date: date(),
            message: "no clock-in recorded".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift record for employee 'emp_001' on 2026-01-15: no clock-in recorded"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                employee_id: "emp_404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }
}
