//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, OrganisationMetadata, ShiftPolicy};

const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/joygardens/
/// └── engine.yaml   # Organisation metadata and shift policy
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/joygardens").unwrap();
/// println!("Standard shift: {} hours", loader.standard_shift_hours());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if `engine.yaml` cannot be read
    /// - [`EngineError::ConfigParseError`] if it is not valid YAML for [`EngineConfig`]
    /// - [`EngineError::InvalidConfig`] if the standard shift length is not positive
    ///   or a required name is blank
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path)
            .map_err(|_| EngineError::ConfigNotFound { path: path_str.clone() })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `source` names where the text came from and is only used in errors.
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;

        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.shift.standard_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "shift.standard_hours".to_string(),
                message: format!(
                    "must be greater than zero, got {}",
                    config.shift.standard_hours
                ),
            });
        }
        if config.organisation.name.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "organisation.name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        &self.config.organisation
    }

    /// Returns the standard shift policy.
    pub fn shift_policy(&self) -> &ShiftPolicy {
        &self.config.shift
    }

    /// Returns the configured standard shift length in hours.
    pub fn standard_shift_hours(&self) -> Decimal {
        self.config.shift.standard_hours
    }
}
