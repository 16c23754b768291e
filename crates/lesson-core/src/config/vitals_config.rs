//! Vitals configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AGE_YEARS, DEFAULT_HEIGHT_M, DEFAULT_WEIGHT_KG};

/// Measurements fed into the report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VitalsConfig {
    /// Age in years. Default: 25.
    pub age: Option<u32>,
    /// Height in meters. Default: 1.75.
    pub height_m: Option<f64>,
    /// Weight in kilograms. Default: 70.5.
    pub weight_kg: Option<f64>,
}

impl VitalsConfig {
    pub fn effective_age(&self) -> u32 {
        self.age.unwrap_or(DEFAULT_AGE_YEARS)
    }

    pub fn effective_height_m(&self) -> f64 {
        self.height_m.unwrap_or(DEFAULT_HEIGHT_M)
    }

    pub fn effective_weight_kg(&self) -> f64 {
        self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG)
    }
}
