//! Request types for the attendance engine API.
//!
//! The summary and report endpoints take the employee directory and the shift
//! record snapshot in the request body. Employee production units and record
//! hours may be omitted; they are filled in from configuration.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_shift_hours;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovalState, Employee, ReportFilters, ReportingPeriod, ShiftRecord, ensure_unique_employees,
    ensure_unique_records,
};

/// A shift wraps midnight at most once, so it lasts less than a day.
const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

fn default_active() -> bool {
    true
}

/// Request body for `POST /hours`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Clock-in time of day.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time of day.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
}

/// An employee in a summary or report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// National identity document number.
    pub national_id: String,
    /// Given names.
    pub first_names: String,
    /// Family names.
    pub last_names: String,
    /// Organisational area.
    pub area: String,
    /// Job position.
    #[serde(default)]
    pub position: String,
    /// The date the employee joined.
    pub hire_date: NaiveDate,
    /// Whether the employee is still active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Production unit; the configured default applies when absent.
    #[serde(default)]
    pub production_unit: Option<String>,
}

impl EmployeeRequest {
    /// Converts to the domain type, falling back to `default_production_unit`.
    pub fn into_employee(self, default_production_unit: &str) -> Employee {
        Employee {
            id: self.id,
            national_id: self.national_id,
            first_names: self.first_names,
            last_names: self.last_names,
            area: self.area,
            position: self.position,
            hire_date: self.hire_date,
            active: self.active,
            production_unit: self
                .production_unit
                .unwrap_or_else(|| default_production_unit.to_string()),
        }
    }
}

/// A stored shift record in a summary or report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Clock-in time of day.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time of day.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
    /// Stored worked hours. Computed from the clock times when absent.
    #[serde(default)]
    pub worked_hours: Option<Decimal>,
    /// Stored overtime hours. Computed from the clock times when absent.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Review state.
    #[serde(default)]
    pub approval_state: ApprovalState,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Reviewer identifier.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// Review timestamp.
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
}

impl ShiftRecordRequest {
    /// Converts to the domain type.
    ///
    /// `worked_hours` and `overtime_hours` are supplied together or not at
    /// all. Missing hours are calculated against `standard_hours`; supplied
    /// hours are kept as stored once they fit within a single shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] if only one of the hour fields
    /// is supplied or the stored hours are impossible for a single shift.
    pub fn into_record(self, standard_hours: Decimal) -> EngineResult<ShiftRecord> {
        let (worked_hours, overtime_hours) = match (self.worked_hours, self.overtime_hours) {
            (Some(worked), Some(overtime)) => {
                self.check_stored_hours(worked, overtime, standard_hours)?;
                (worked, overtime)
            }
            (None, None) => {
                let computed =
                    calculate_shift_hours(self.entry_time, self.exit_time, standard_hours, 1);
                (computed.worked_hours, computed.overtime_hours)
            }
            (worked, overtime) => {
                let negative = [("worked_hours", worked), ("overtime_hours", overtime)]
                    .into_iter()
                    .find(|(_, value)| value.is_some_and(|v| v < Decimal::ZERO));
                return Err(self.invalid(match negative {
                    Some((field, _)) => format!("{} must not be negative", field),
                    None => "worked_hours and overtime_hours must be supplied together".to_string(),
                }));
            }
        };

        Ok(ShiftRecord {
            id: self.id,
            employee_id: self.employee_id,
            date: self.date,
            entry_time: self.entry_time,
            exit_time: self.exit_time,
            worked_hours,
            overtime_hours,
            approval_state: self.approval_state,
            notes: self.notes,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
        })
    }

    /// Stored hours must look like the output of the shift calculator:
    /// non-negative, worked capped at `standard_hours`, overtime only once the
    /// cap is reached, and less than one day in total.
    fn check_stored_hours(
        &self,
        worked: Decimal,
        overtime: Decimal,
        standard_hours: Decimal,
    ) -> EngineResult<()> {
        if worked < Decimal::ZERO {
            return Err(self.invalid("worked_hours must not be negative".to_string()));
        }
        if overtime < Decimal::ZERO {
            return Err(self.invalid("overtime_hours must not be negative".to_string()));
        }
        if worked > standard_hours {
            return Err(self.invalid(format!(
                "worked_hours {} exceeds the {} hour standard shift",
                worked, standard_hours
            )));
        }
        if overtime > Decimal::ZERO && worked != standard_hours {
            return Err(self.invalid(format!(
                "overtime_hours {} recorded before the {} hour standard shift was worked",
                overtime, standard_hours
            )));
        }
        if overtime >= HOURS_PER_DAY - worked {
            return Err(self.invalid(format!(
                "worked_hours plus overtime_hours must be under {} hours",
                HOURS_PER_DAY
            )));
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidRecord {
            employee_id: self.employee_id.clone(),
            date: self.date,
            message,
        }
    }
}

/// Request body for `POST /summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The employee to summarise.
    pub employee_id: String,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// The employee directory.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// The shift record snapshot.
    #[serde(default)]
    pub records: Vec<ShiftRecordRequest>,
}

impl SummaryRequest {
    /// The reporting period covered by this request.
    pub fn period(&self) -> ReportingPeriod {
        ReportingPeriod::new(self.start_date, self.end_date)
    }
}

/// Request body for `POST /report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Only include employees in this area.
    #[serde(default)]
    pub area: Option<String>,
    /// Only include employees in this production unit.
    #[serde(default)]
    pub production_unit: Option<String>,
    /// The employee directory.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// The shift record snapshot.
    #[serde(default)]
    pub records: Vec<ShiftRecordRequest>,
}

impl ReportRequest {
    /// The reporting period covered by this request.
    pub fn period(&self) -> ReportingPeriod {
        ReportingPeriod::new(self.start_date, self.end_date)
    }

    /// The grouping filters echoed in the report.
    pub fn filters(&self) -> ReportFilters {
        ReportFilters {
            area: self.area.clone(),
            production_unit: self.production_unit.clone(),
        }
    }
}

/// Converts a request's employee directory and record snapshot to domain types.
///
/// # Errors
///
/// - [`EngineError::DuplicateEmployee`] if an employee id repeats
/// - [`EngineError::DuplicateRecord`] if two records share an employee and date
/// - [`EngineError::InvalidRecord`] if a record's stored hours are unusable
pub(crate) fn into_domain(
    employees: Vec<EmployeeRequest>,
    records: Vec<ShiftRecordRequest>,
    default_production_unit: &str,
    standard_hours: Decimal,
) -> EngineResult<(Vec<Employee>, Vec<ShiftRecord>)> {
    let employees: Vec<Employee> = employees
        .into_iter()
        .map(|e| e.into_employee(default_production_unit))
        .collect();
    ensure_unique_employees(&employees)?;

    let records = records
        .into_iter()
        .map(|r| r.into_record(standard_hours))
        .collect::<EngineResult<Vec<_>>>()?;
    ensure_unique_records(&records)?;

    Ok((employees, records))
}
