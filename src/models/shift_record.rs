//! Shift record model and its lifecycle.
//!
//! A [`ShiftRecord`] is one employee's attendance for one calendar date. It is
//! created at clock-in, completed at clock-out and finally reviewed by an
//! approver, which moves it out of [`ApprovalState::Pending`] exactly once.

use std::collections::HashSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_hours;
use crate::error::{EngineError, EngineResult};

/// Approval lifecycle tag on a shift record.
///
/// Only [`ApprovalState::Approved`] records count toward period totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Awaiting review. Every record starts here.
    #[default]
    Pending,
    /// Accepted by an approver.
    Approved,
    /// Refused by an approver.
    Rejected,
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalState::Pending => write!(f, "Pending"),
            ApprovalState::Approved => write!(f, "Approved"),
            ApprovalState::Rejected => write!(f, "Rejected"),
        }
    }
}

/// The outcome an approver can give a pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Move the record to [`ApprovalState::Approved`].
    Approve,
    /// Move the record to [`ApprovalState::Rejected`].
    Reject,
}

impl ReviewDecision {
    /// The approval state this decision leads to.
    pub fn target_state(self) -> ApprovalState {
        match self {
            ReviewDecision::Approve => ApprovalState::Approved,
            ReviewDecision::Reject => ApprovalState::Rejected,
        }
    }

    fn note_prefix(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "[Approved]",
            ReviewDecision::Reject => "[Rejected]",
        }
    }
}

/// One employee's attendance for one calendar date.
///
/// `worked_hours` and `overtime_hours` are derived from the entry and exit
/// times and stay zero until both are present.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ApprovalState, ShiftRecord};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut record = ShiftRecord::clock_in(
///     "rec_001",
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     None,
/// );
/// record.clock_out(NaiveTime::from_hms_opt(14, 30, 0).unwrap(), None).unwrap();
///
/// assert_eq!(record.worked_hours, Decimal::new(6, 0));
/// assert_eq!(record.overtime_hours, Decimal::new(5, 1));
/// assert_eq!(record.approval_state, ApprovalState::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Clock-in time of day, absent until clock-in.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Clock-out time of day, absent until clock-out.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
    /// Hours worked up to the standard shift length.
    #[serde(default)]
    pub worked_hours: Decimal,
    /// Hours worked beyond the standard shift length.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Review state of the record.
    #[serde(default)]
    pub approval_state: ApprovalState,
    /// Free-text notes, including review remarks.
    #[serde(default)]
    pub notes: Option<String>,
    /// The user who reviewed the record.
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the record was reviewed.
    #[serde(default)]
    pub approved_at: Option<NaiveDateTime>,
}

impl ShiftRecord {
    /// Creates a pending record at clock-in, with no exit time and zero hours.
    pub fn clock_in(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        entry_time: NaiveTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            entry_time: Some(entry_time),
            exit_time: None,
            worked_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            approval_state: ApprovalState::Pending,
            notes: notes.filter(|n| !n.trim().is_empty()),
            approved_by: None,
            approved_at: None,
        }
    }

    /// Records the exit time and stores the computed worked/overtime hours.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] when the record has no entry time
    /// or already has an exit time.
    pub fn clock_out(&mut self, exit_time: NaiveTime, notes: Option<String>) -> EngineResult<()> {
        if self.entry_time.is_none() {
            return Err(self.invalid("no clock-in recorded"));
        }
        if self.exit_time.is_some() {
            return Err(self.invalid("clock-out already recorded"));
        }

        self.exit_time = Some(exit_time);
        self.recompute_hours();
        if let Some(text) = notes.filter(|n| !n.trim().is_empty()) {
            self.append_note(&text);
        }
        Ok(())
    }

    /// Moves a pending record to approved or rejected.
    ///
    /// Review remarks are appended to the notes with an `[Approved]` or
    /// `[Rejected]` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyReviewed`] if the record is not pending.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        approver_id: impl Into<String>,
        reviewed_at: NaiveDateTime,
        notes: Option<String>,
    ) -> EngineResult<()> {
        if self.approval_state != ApprovalState::Pending {
            return Err(EngineError::AlreadyReviewed {
                employee_id: self.employee_id.clone(),
                date: self.date,
                state: self.approval_state,
            });
        }

        self.approval_state = decision.target_state();
        self.approved_by = Some(approver_id.into());
        self.approved_at = Some(reviewed_at);
        if let Some(text) = notes.filter(|n| !n.trim().is_empty()) {
            self.append_note(&format!("{} {}", decision.note_prefix(), text));
        }
        Ok(())
    }

    /// Recomputes the derived hours from the current entry and exit times.
    pub fn recompute_hours(&mut self) {
        let (worked, overtime) = compute_hours(self.entry_time, self.exit_time);
        self.worked_hours = worked;
        self.overtime_hours = overtime;
    }

    /// Returns true if the record counts toward period totals.
    pub fn is_approved(&self) -> bool {
        self.approval_state == ApprovalState::Approved
    }

    fn append_note(&mut self, text: &str) {
        self.notes = Some(match self.notes.take() {
            Some(existing) => format!("{}; {}", existing, text),
            None => text.to_string(),
        });
    }

    fn invalid(&self, message: &str) -> EngineError {
        EngineError::InvalidRecord {
            employee_id: self.employee_id.clone(),
            date: self.date,
            message: message.to_string(),
        }
    }
}

/// Checks that no two records share the same (employee, date) pair.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateRecord`] for the first repeated pair found.
pub fn ensure_unique_records(records: &[ShiftRecord]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert((record.employee_id.as_str(), record.date)) {
            return Err(EngineError::DuplicateRecord {
                employee_id: record.employee_id.clone(),
                date: record.date,
            });
        }
    }
    Ok(())
}
