//! Attendance filter.
//!
//! Every option a caller can narrow records or employees by is an explicit
//! field here; unset fields do not filter.

use serde::{Deserialize, Serialize};

use super::{ApprovalState, Employee, ReportingPeriod, ShiftRecord};

/// Filter options for employees and shift records.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceFilter, ApprovalState, ReportingPeriod};
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// let filter = AttendanceFilter::for_report(period, Some("Production".to_string()), None);
///
/// assert_eq!(filter.approval_state, Some(ApprovalState::Approved));
/// assert!(!filter.include_inactive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceFilter {
    /// Only records belonging to this employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Only employees in this organisational area.
    #[serde(default)]
    pub area: Option<String>,
    /// Only employees in this production unit.
    #[serde(default)]
    pub production_unit: Option<String>,
    /// Only records in this approval state.
    #[serde(default)]
    pub approval_state: Option<ApprovalState>,
    /// Only records dated within this period.
    #[serde(default)]
    pub period: Option<ReportingPeriod>,
    /// Keep employees marked inactive.
    #[serde(default)]
    pub include_inactive: bool,
}

impl AttendanceFilter {
    /// The filter used for period reports: approved records inside `period`
    /// belonging to active employees, optionally narrowed by area and unit.
    pub fn for_report(
        period: ReportingPeriod,
        area: Option<String>,
        production_unit: Option<String>,
    ) -> Self {
        Self {
            employee_id: None,
            area,
            production_unit,
            approval_state: Some(ApprovalState::Approved),
            period: Some(period),
            include_inactive: false,
        }
    }

    /// Returns true if the employee passes the activity, area and unit options.
    pub fn matches_employee(&self, employee: &Employee) -> bool {
        if !self.include_inactive && !employee.active {
            return false;
        }
        if self.employee_id.as_ref().is_some_and(|id| *id != employee.id) {
            return false;
        }
        if self.area.as_ref().is_some_and(|area| *area != employee.area) {
            return false;
        }
        self.production_unit
            .as_ref()
            .is_none_or(|unit| *unit == employee.production_unit)
    }

    /// Returns true if the record passes the employee, state and period options.
    ///
    /// Area and unit options apply to employees, see [`Self::matches_employee`].
    pub fn matches_record(&self, record: &ShiftRecord) -> bool {
        if self
            .employee_id
            .as_ref()
            .is_some_and(|id| *id != record.employee_id)
        {
            return false;
        }
        if self
            .approval_state
            .is_some_and(|state| state != record.approval_state)
        {
            return false;
        }
        self.period
            .is_none_or(|period| period.contains_date(record.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn employee(id: &str, area: &str, unit: &str, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            national_id: "1700000001".to_string(),
            first_names: "Test".to_string(),
            last_names: "Employee".to_string(),
            area: area.to_string(),
            position: "Operator".to_string(),
            hire_date: make_date("2022-01-10"),
            active,
            production_unit: unit.to_string(),
        }
    }

    fn record(employee_id: &str, date: &str, state: ApprovalState) -> ShiftRecord {
        let mut record = ShiftRecord::clock_in(
            format!("rec_{}_{}", employee_id, date),
            employee_id,
            make_date(date),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            None,
        );
        record.approval_state = state;
        record
    }

    fn january() -> ReportingPeriod {
        ReportingPeriod::new(make_date("2026-01-01"), make_date("2026-01-31"))
    }

    #[test]
    fn test_default_filter_matches_active_employees_and_all_records() {
        let filter = AttendanceFilter::default();

        assert!(filter.matches_employee(&employee("emp_001", "Production", "JOYGARDENS", true)));
        assert!(!filter.matches_employee(&employee("emp_002", "Production", "JOYGARDENS", false)));
        assert!(filter.matches_record(&record("emp_001", "2025-12-31", ApprovalState::Rejected)));
    }

    #[test]
    fn test_include_inactive() {
        let filter = AttendanceFilter {
            include_inactive: true,
            ..Default::default()
        };
        assert!(filter.matches_employee(&employee("emp_002", "Production", "JOYGARDENS", false)));
    }

    #[test]
    fn test_area_and_unit_filters() {
        let filter = AttendanceFilter::for_report(
            january(),
            Some("Production".to_string()),
            Some("JOYGARDENS".to_string()),
        );

        assert!(filter.matches_employee(&employee("emp_001", "Production", "JOYGARDENS", true)));
        assert!(!filter.matches_employee(&employee("emp_002", "Packing", "JOYGARDENS", true)));
        assert!(!filter.matches_employee(&employee("emp_003", "Production", "FLORES", true)));
    }

    #[test]
    fn test_report_filter_keeps_only_approved_records_in_period() {
        let filter = AttendanceFilter::for_report(january(), None, None);

        assert!(filter.matches_record(&record("emp_001", "2026-01-15", ApprovalState::Approved)));
        assert!(!filter.matches_record(&record("emp_001", "2026-01-15", ApprovalState::Pending)));
        assert!(!filter.matches_record(&record("emp_001", "2026-01-15", ApprovalState::Rejected)));
        assert!(!filter.matches_record(&record("emp_001", "2026-02-01", ApprovalState::Approved)));
    }

    #[test]
    fn test_employee_id_filter_applies_to_records() {
        let filter = AttendanceFilter {
            employee_id: Some("emp_001".to_string()),
            ..Default::default()
        };

        assert!(filter.matches_record(&record("emp_001", "2026-01-15", ApprovalState::Pending)));
        assert!(!filter.matches_record(&record("emp_002", "2026-01-15", ApprovalState::Pending)));
    }

    #[test]
    fn test_filter_deserializes_with_missing_fields() {
        let json = r#"{"area": "Production", "approval_state": "approved"}"#;
        let filter: AttendanceFilter = serde_json::from_str(json).unwrap();

        assert_eq!(filter.area.as_deref(), Some("Production"));
        assert_eq!(filter.approval_state, Some(ApprovalState::Approved));
        assert_eq!(filter.period, None);
        assert!(!filter.include_inactive);
    }
}
