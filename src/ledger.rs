//! In-memory attendance ledger.
//!
//! The ledger owns shift records keyed by (employee, date) and drives them
//! through their lifecycle: clock-in, clock-out and a single review. Keying by
//! the pair enforces at most one record per employee per day.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceFilter, Employee, ReviewDecision, ShiftRecord};

type RecordKey = (String, NaiveDate);

/// Shift records for many employees, one per employee per day.
///
/// # Example
///
/// ```
/// use attendance_engine::ledger::AttendanceLedger;
/// use attendance_engine::models::{ApprovalState, Employee, ReviewDecision};
/// use chrono::{NaiveDate, NaiveTime};
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
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let mut ledger = AttendanceLedger::new();
/// ledger.clock_in(&employee, date, NaiveTime::from_hms_opt(8, 0, 0).unwrap(), None)?;
/// ledger.clock_out("emp_001", date, NaiveTime::from_hms_opt(14, 30, 0).unwrap(), None)?;
/// let record = ledger.review(
///     "emp_001",
///     date,
///     ReviewDecision::Approve,
///     "usr_hr",
///     date.and_hms_opt(18, 0, 0).unwrap(),
///     None,
/// )?;
///
/// assert_eq!(record.approval_state, ApprovalState::Approved);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttendanceLedger {
    records: BTreeMap<RecordKey, ShiftRecord>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from existing records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateRecord`] if two records share an
    /// employee and date.
    pub fn from_records(records: impl IntoIterator<Item = ShiftRecord>) -> EngineResult<Self> {
        let mut ledger = Self::new();
        for record in records {
            let key = (record.employee_id.clone(), record.date);
            if ledger.records.contains_key(&key) {
                return Err(EngineError::DuplicateRecord {
                    employee_id: key.0,
                    date: key.1,
                });
            }
            ledger.records.insert(key, record);
        }
        Ok(ledger)
    }

    /// Records a clock-in, creating a pending record for the day.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InactiveEmployee`] if the employee is inactive
    /// - [`EngineError::DuplicateRecord`] if the employee already has a record
    ///   for `date`
    pub fn clock_in(
        &mut self,
        employee: &Employee,
        date: NaiveDate,
        entry_time: NaiveTime,
        notes: Option<String>,
    ) -> EngineResult<&ShiftRecord> {
        if !employee.active {
            return Err(EngineError::InactiveEmployee {
                employee_id: employee.id.clone(),
            });
        }

        let key = (employee.id.clone(), date);
        if self.records.contains_key(&key) {
            return Err(EngineError::DuplicateRecord {
                employee_id: employee.id.clone(),
                date,
            });
        }

        let record = ShiftRecord::clock_in(
            Uuid::new_v4().to_string(),
            employee.id.clone(),
            date,
            entry_time,
            notes,
        );
        info!(
            employee_id = %employee.id,
            date = %date,
            entry_time = %entry_time,
            "Clock-in recorded"
        );
        Ok(&*self.records.entry(key).or_insert(record))
    }

    /// Records a clock-out and computes the shift's hours.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RecordNotFound`] if there is no record for the day
    /// - [`EngineError::InvalidRecord`] if the record is already clocked out
    pub fn clock_out(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        exit_time: NaiveTime,
        notes: Option<String>,
    ) -> EngineResult<&ShiftRecord> {
        let record = self.record_mut(employee_id, date)?;
        record.clock_out(exit_time, notes)?;
        info!(
            employee_id = %employee_id,
            date = %date,
            exit_time = %exit_time,
            worked_hours = %record.worked_hours,
            overtime_hours = %record.overtime_hours,
            "Clock-out recorded"
        );
        Ok(&*record)
    }

    /// Approves or rejects a pending record.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RecordNotFound`] if there is no record for the day
    /// - [`EngineError::AlreadyReviewed`] if the record is not pending
    pub fn review(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        decision: ReviewDecision,
        approver_id: &str,
        reviewed_at: NaiveDateTime,
        notes: Option<String>,
    ) -> EngineResult<&ShiftRecord> {
        let record = self.record_mut(employee_id, date)?;
        record.review(decision, approver_id, reviewed_at, notes)?;
        info!(
            employee_id = %employee_id,
            date = %date,
            approver_id = %approver_id,
            state = %record.approval_state,
            "Shift record reviewed"
        );
        Ok(&*record)
    }

    /// Returns the record for an employee on a date, if any.
    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<&ShiftRecord> {
        self.records.get(&(employee_id.to_string(), date))
    }

    /// Returns the records passing `filter`, newest date first, then by employee id.
    ///
    /// Area, production unit and activity options are checked against the
    /// record's employee in `employees`; records whose employee is not listed
    /// there are left out.
    pub fn records<'a>(
        &'a self,
        filter: &AttendanceFilter,
        employees: &[Employee],
    ) -> Vec<&'a ShiftRecord> {
        let directory: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.id.as_str(), e)).collect();

        let mut matched: Vec<&ShiftRecord> = self
            .records
            .values()
            .filter(|record| filter.matches_record(record))
            .filter(|record| {
                directory
                    .get(record.employee_id.as_str())
                    .is_some_and(|employee| filter.matches_employee(employee))
            })
            .collect();
        matched.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        debug!(count = matched.len(), "Filtered shift records");
        matched
    }

    /// Returns a copy of every record, ordered by employee id then date.
    pub fn snapshot(&self) -> Vec<ShiftRecord> {
        self.records.values().cloned().collect()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, employee_id: &str, date: NaiveDate) -> EngineResult<&mut ShiftRecord> {
        self.records
            .get_mut(&(employee_id.to_string(), date))
            .ok_or_else(|| EngineError::RecordNotFound {
                employee_id: employee_id.to_string(),
                date,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::summarize_employee;
    use crate::models::{ApprovalState, ReportingPeriod};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn employee(id: &str, area: &str) -> Employee {
        Employee {
            id: id.to_string(),
            national_id: "1712345678".to_string(),
            first_names: "Ana".to_string(),
            last_names: "Paredes".to_string(),
            area: area.to_string(),
            position: "Operator".to_string(),
            hire_date: make_date("2022-05-05"),
            active: true,
            production_unit: "JOYGARDENS".to_string(),
        }
    }

    fn reviewed_at() -> NaiveDateTime {
        make_date("2026-01-20").and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_full_lifecycle() {
        let emp = employee("emp_001", "Production");
        let date = make_date("2026-01-15");
        let mut ledger = AttendanceLedger::new();

        let created = ledger
            .clock_in(&emp, date, make_time("08:00:00"), None)
            .unwrap();
        assert_eq!(created.approval_state, ApprovalState::Pending);
        assert_eq!(created.exit_time, None);

        let closed = ledger
            .clock_out("emp_001", date, make_time("15:00:00"), None)
            .unwrap();
        assert_eq!(closed.worked_hours, dec("6"));
        assert_eq!(closed.overtime_hours, dec("1"));

        let reviewed = ledger
            .review(
                "emp_001",
                date,
                ReviewDecision::Approve,
                "usr_hr",
                reviewed_at(),
                Some("ok".to_string()),
            )
            .unwrap();
        assert_eq!(reviewed.approval_state, ApprovalState::Approved);
        assert_eq!(reviewed.notes.as_deref(), Some("[Approved] ok"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_second_clock_in_same_day_is_rejected() {
        let emp = employee("emp_001", "Production");
        let date = make_date("2026-01-15");
        let mut ledger = AttendanceLedger::new();
        ledger
            .clock_in(&emp, date, make_time("08:00:00"), None)
            .unwrap();

        let err = ledger
            .clock_in(&emp, date, make_time("09:00:00"), None)
            .unwrap_err();

        assert!(matches!(err, EngineError::DuplicateRecord { .. }));
        assert_eq!(
            ledger.get("emp_001", date).unwrap().entry_time,
            Some(make_time("08:00:00"))
        );
    }

    #[test]
    fn test_inactive_employee_cannot_clock_in() {
        let mut emp = employee("emp_001", "Production");
        emp.active = false;
        let mut ledger = AttendanceLedger::new();

        let err = ledger
            .clock_in(&emp, make_date("2026-01-15"), make_time("08:00:00"), None)
            .unwrap_err();

        assert!(matches!(err, EngineError::InactiveEmployee { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_clock_out_without_clock_in_is_not_found() {
        let mut ledger = AttendanceLedger::new();
        let err = ledger
            .clock_out("emp_001", make_date("2026-01-15"), make_time("14:00:00"), None)
            .unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound { .. }));
    }

    #[test]
    fn test_review_twice_is_rejected() {
        let emp = employee("emp_001", "Production");
        let date = make_date("2026-01-15");
        let mut ledger = AttendanceLedger::new();
        ledger
            .clock_in(&emp, date, make_time("08:00:00"), None)
            .unwrap();
        ledger
            .review("emp_001", date, ReviewDecision::Approve, "usr_hr", reviewed_at(), None)
            .unwrap();

        let err = ledger
            .review("emp_001", date, ReviewDecision::Reject, "usr_hr", reviewed_at(), None)
            .unwrap_err();

        assert!(matches!(err, EngineError::AlreadyReviewed { .. }));
        assert_eq!(
            ledger.get("emp_001", date).unwrap().approval_state,
            ApprovalState::Approved
        );
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let record = ShiftRecord::clock_in(
            "rec_1",
            "emp_001",
            make_date("2026-01-15"),
            make_time("08:00:00"),
            None,
        );
        let mut duplicate = record.clone();
        duplicate.id = "rec_2".to_string();

        let err = AttendanceLedger::from_records(vec![record, duplicate]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateRecord { .. }));
    }

    #[test]
    fn test_records_are_filtered_and_ordered() {
        let production = employee("emp_001", "Production");
        let packing = employee("emp_002", "Packing");
        let employees = vec![production.clone(), packing.clone()];
        let mut ledger = AttendanceLedger::new();
        for day in ["2026-01-12", "2026-01-13", "2026-01-14"] {
            ledger
                .clock_in(&production, make_date(day), make_time("08:00:00"), None)
                .unwrap();
            ledger
                .clock_in(&packing, make_date(day), make_time("08:00:00"), None)
                .unwrap();
        }
        ledger
            .review(
                "emp_001",
                make_date("2026-01-13"),
                ReviewDecision::Approve,
                "usr_hr",
                reviewed_at(),
                None,
            )
            .unwrap();

        let all = ledger.records(&AttendanceFilter::default(), &employees);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].date, make_date("2026-01-14"));
        assert_eq!(all[0].employee_id, "emp_001");
        assert_eq!(all[1].employee_id, "emp_002");
        assert_eq!(all[5].date, make_date("2026-01-12"));

        let by_area = AttendanceFilter {
            area: Some("Packing".to_string()),
            ..Default::default()
        };
        let packing_records = ledger.records(&by_area, &employees);
        assert_eq!(packing_records.len(), 3);
        assert!(packing_records.iter().all(|r| r.employee_id == "emp_002"));

        let approved = AttendanceFilter {
            approval_state: Some(ApprovalState::Approved),
            period: Some(ReportingPeriod::new(
                make_date("2026-01-12"),
                make_date("2026-01-13"),
            )),
            ..Default::default()
        };
        let approved_records = ledger.records(&approved, &employees);
        assert_eq!(approved_records.len(), 1);
        assert_eq!(approved_records[0].date, make_date("2026-01-13"));
    }

    #[test]
    fn test_snapshot_feeds_the_aggregator() {
        let emp = employee("emp_001", "Production");
        let mut ledger = AttendanceLedger::new();
        for day in ["2026-01-12", "2026-01-13"] {
            let date = make_date(day);
            ledger
                .clock_in(&emp, date, make_time("08:00:00"), None)
                .unwrap();
            ledger
                .clock_out("emp_001", date, make_time("14:30:00"), None)
                .unwrap();
            ledger
                .review("emp_001", date, ReviewDecision::Approve, "usr_hr", reviewed_at(), None)
                .unwrap();
        }

        let period = ReportingPeriod::new(make_date("2026-01-12"), make_date("2026-01-18"));
        let summary =
            summarize_employee("emp_001", period, &[emp], &ledger.snapshot()).unwrap();

        assert_eq!(summary.total_worked_hours, dec("12"));
        assert_eq!(summary.total_overtime_hours, dec("1"));
        assert_eq!(summary.days_attended, 2);
        assert_eq!(summary.days_missed, 4);
    }
}
