//! Shift hours calculation.
//!
//! This module converts one day's clock-in and clock-out times of day into
//! worked hours and overtime hours, splitting at the standard shift length and
//! handling shifts that run past midnight.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Standard shift length in hours. Time beyond it is overtime.
pub const STANDARD_SHIFT_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;

/// The result of calculating hours for a single shift.
///
/// `worked_hours + overtime_hours == elapsed_hours` whenever both clock times
/// are present. No rounding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHoursResult {
    /// Elapsed hours capped at the threshold.
    pub worked_hours: Decimal,
    /// Elapsed hours beyond the threshold.
    pub overtime_hours: Decimal,
    /// Total elapsed hours between clock-in and clock-out.
    pub elapsed_hours: Decimal,
    /// Whether the exit time wrapped past midnight.
    pub crosses_midnight: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates worked and overtime hours for one shift.
///
/// # Arguments
///
/// * `entry_time` - Clock-in time of day, if recorded
/// * `exit_time` - Clock-out time of day, if recorded
/// * `threshold` - The standard shift length (typically [`STANDARD_SHIFT_HOURS`])
/// * `step_number` - The step number for audit trail sequencing
///
/// # Behavior
///
/// - Either time absent: zero worked and zero overtime hours.
/// - Exit earlier than entry: the shift crossed midnight, so 24 hours are added
///   to the elapsed time. At most one midnight crossing is representable.
/// - Equal entry and exit: zero elapsed hours.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{calculate_shift_hours, STANDARD_SHIFT_HOURS};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = NaiveTime::from_hms_opt(22, 0, 0);
/// let exit = NaiveTime::from_hms_opt(5, 0, 0);
/// let result = calculate_shift_hours(entry, exit, STANDARD_SHIFT_HOURS, 1);
///
/// assert!(result.crosses_midnight);
/// assert_eq!(result.worked_hours, Decimal::from_str("6").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("1").unwrap());
/// ```
pub fn calculate_shift_hours(
    entry_time: Option<NaiveTime>,
    exit_time: Option<NaiveTime>,
    threshold: Decimal,
    step_number: u32,
) -> ShiftHoursResult {
    let (Some(entry), Some(exit)) = (entry_time, exit_time) else {
        let missing = match (entry_time, exit_time) {
            (None, None) => "clock-in and clock-out",
            (None, Some(_)) => "clock-in",
            _ => "clock-out",
        };
        return ShiftHoursResult {
            worked_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            elapsed_hours: Decimal::ZERO,
            crosses_midnight: false,
            audit_step: audit_step(
                step_number,
                entry_time,
                exit_time,
                threshold,
                Decimal::ZERO,
                Decimal::ZERO,
                format!("No {} recorded, shift counts zero hours", missing),
            ),
        };
    };

    let crosses_midnight = exit < entry;
    let mut elapsed_seconds = (exit - entry).num_seconds();
    if crosses_midnight {
        elapsed_seconds += SECONDS_PER_DAY;
    }
    let elapsed_hours = Decimal::new(elapsed_seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0);

    let worked_hours = elapsed_hours.min(threshold);
    let overtime_hours = (elapsed_hours - threshold).max(Decimal::ZERO);

    let mut reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours elapsed exceeds {} hour standard shift by {} hours of overtime",
            elapsed_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else if elapsed_hours == threshold {
        format!(
            "{} hours elapsed equals {} hour standard shift, no overtime",
            elapsed_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours elapsed is under {} hour standard shift, no overtime",
            elapsed_hours.normalize(),
            threshold.normalize()
        )
    };
    if crosses_midnight {
        reasoning.push_str(" (exit wrapped past midnight, 24 hours added)");
    }

    ShiftHoursResult {
        worked_hours,
        overtime_hours,
        elapsed_hours,
        crosses_midnight,
        audit_step: audit_step(
            step_number,
            entry_time,
            exit_time,
            threshold,
            worked_hours,
            overtime_hours,
            reasoning,
        ),
    }
}

/// Computes `(worked_hours, overtime_hours)` against the standard shift length.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::compute_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let (worked, overtime) = compute_hours(
///     NaiveTime::from_hms_opt(8, 0, 0),
///     NaiveTime::from_hms_opt(14, 30, 0),
/// );
/// assert_eq!(worked, Decimal::new(60, 1));
/// assert_eq!(overtime, Decimal::new(5, 1));
///
/// assert_eq!(
///     compute_hours(NaiveTime::from_hms_opt(8, 0, 0), None),
///     (Decimal::ZERO, Decimal::ZERO)
/// );
/// ```
pub fn compute_hours(
    entry_time: Option<NaiveTime>,
    exit_time: Option<NaiveTime>,
) -> (Decimal, Decimal) {
    let result = calculate_shift_hours(entry_time, exit_time, STANDARD_SHIFT_HOURS, 1);
    (result.worked_hours, result.overtime_hours)
}

fn audit_step(
    step_number: u32,
    entry_time: Option<NaiveTime>,
    exit_time: Option<NaiveTime>,
    threshold: Decimal,
    worked_hours: Decimal,
    overtime_hours: Decimal,
    reasoning: String,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "shift_hours".to_string(),
        rule_name: "Shift Hours Calculation".to_string(),
        policy_ref: "standard_shift".to_string(),
        input: serde_json::json!({
            "entry_time": entry_time.map(|t| t.format("%H:%M:%S").to_string()),
            "exit_time": exit_time.map(|t| t.format("%H:%M:%S").to_string()),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    }
}
