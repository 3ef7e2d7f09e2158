//! Audit step model.
//!
//! The shift calculator records the decision it made as an [`AuditStep`] so
//! callers can show how a record's hours were derived.

use serde::{Deserialize, Serialize};

/// One recorded calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// Position of this step within its trail, starting at 1.
    pub step_number: u32,
    /// Stable rule identifier, e.g. `shift_hours`.
    pub rule_id: String,
    /// Display name of the rule.
    pub rule_name: String,
    /// The attendance policy the rule was applied under.
    pub policy_ref: String,
    /// Clock times and threshold the rule saw.
    pub input: serde_json::Value,
    /// Hours the rule produced.
    pub output: serde_json::Value,
    /// Plain-language account of the decision.
    pub reasoning: String,
}
