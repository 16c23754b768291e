//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. Default: "warn".
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
