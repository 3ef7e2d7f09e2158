//! Configuration types for the attendance engine.
//!
//! These structures are deserialized from `engine.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the organisation the engine reports for.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationMetadata {
    /// The human-readable organisation name.
    pub name: String,
    /// Production unit assigned to employees created without one.
    pub default_production_unit: String,
}

/// The standard shift policy.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftPolicy {
    /// Hours in a standard shift. Elapsed time beyond this is overtime.
    pub standard_hours: Decimal,
    /// Reference recorded in audit steps produced under this policy.
    pub policy_ref: String,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Organisation metadata.
    pub organisation: OrganisationMetadata,
    /// Standard shift policy.
    pub shift: ShiftPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_deserializes_from_yaml() {
        let yaml = r#"
organisation:
  name: "Joy Gardens"
  default_production_unit: "JOYGARDENS"
shift:
  standard_hours: "6"
  policy_ref: "standard_shift"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.organisation.name, "Joy Gardens");
        assert_eq!(config.shift.standard_hours, Decimal::from(6));
        assert_eq!(config.shift.policy_ref, "standard_shift");
    }

    #[test]
    fn test_missing_section_fails_to_deserialize() {
        let yaml = r#"
organisation:
  name: "Joy Gardens"
  default_production_unit: "JOYGARDENS"
"#;
        let result: Result<EngineConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
