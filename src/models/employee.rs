//! Employee model.
//!
//! Employees are read from the caller's directory; the engine only needs their
//! identity, organisational placement and whether they are still active.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_active() -> bool {
    true
}

/// An employee as seen by the attendance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// National identity document number.
    pub national_id: String,
    /// Given names.
    pub first_names: String,
    /// Family names.
    pub last_names: String,
    /// Organisational area (e.g. "Production").
    pub area: String,
    /// Job position.
    #[serde(default)]
    pub position: String,
    /// The date the employee joined.
    pub hire_date: NaiveDate,
    /// Inactive employees are left out of reports and cannot clock in.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Production unit the employee belongs to.
    pub production_unit: String,
}

impl Employee {
    /// Returns the given names followed by the family names.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     national_id: "1712345678".to_string(),
    ///     first_names: "Ana Lucia".to_string(),
    ///     last_names: "Paredes Mora".to_string(),
    ///     area: "Production".to_string(),
    ///     position: "Operator".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2022, 5, 5).unwrap(),
    ///     active: true,
    ///     production_unit: "JOYGARDENS".to_string(),
    /// };
    /// assert_eq!(employee.full_name(), "Ana Lucia Paredes Mora");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}

/// Checks that no employee id appears twice in a directory.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateEmployee`] for the first repeated id found.
pub fn ensure_unique_employees(employees: &[Employee]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if !seen.insert(employee.id.as_str()) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: employee.id.clone(),
            });
        }
    }
    Ok(())
}
