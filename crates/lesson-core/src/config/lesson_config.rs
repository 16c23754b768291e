//! Top-level lesson configuration.

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, VitalsConfig};
use crate::errors::{ConfigError, LessonResult};
use crate::vitals::Vitals;

/// Top-level configuration aggregating all sub-configs.
///
/// The binary runs on compiled defaults; `from_toml` exists for embedding
/// and tests.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LessonConfig {
    pub vitals: VitalsConfig,
    pub logging: LoggingConfig,
}

impl LessonConfig {
    /// Parse and validate configuration from a TOML string.
    /// Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("vitals.height_m", self.vitals.height_m),
            ("vitals.weight_kg", self.vitals.weight_kg),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number greater than 0".to_string(),
                    });
                }
            }
        }
        if let Some(ref level) = self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build the vitals described by this config.
    pub fn vitals(&self) -> LessonResult<Vitals> {
        let vitals = Vitals::new(
            self.vitals.effective_age(),
            self.vitals.effective_height_m(),
            self.vitals.effective_weight_kg(),
        )?;
        Ok(vitals)
    }
}
