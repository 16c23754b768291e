//! Age, height, weight, and the derived body-mass index.

use crate::constants::{DEFAULT_AGE_YEARS, DEFAULT_HEIGHT_M, DEFAULT_WEIGHT_KG};
use crate::errors::VitalsError;

/// Weight in kilograms divided by height in meters squared.
pub fn body_mass_index(height_m: f64, weight_kg: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// The lesson's four scalars. Immutable once built; BMI is derived on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    age_years: u32,
    height_m: f64,
    weight_kg: f64,
    bmi: f64,
}

impl Vitals {
    /// Build vitals from measurements.
    ///
    /// Height and weight must be finite and strictly positive.
    pub fn new(age_years: u32, height_m: f64, weight_kg: f64) -> Result<Self, VitalsError> {
        check_measurement("height_m", height_m)?;
        check_measurement("weight_kg", weight_kg)?;

        let bmi = body_mass_index(height_m, weight_kg);
        tracing::debug!(age_years, height_m, weight_kg, bmi, "vitals computed");

        Ok(Self {
            age_years,
            height_m,
            weight_kg,
            bmi,
        })
    }

    /// The literal values the lesson is built around: 25 years, 1.75 m, 70.5 kg.
    pub fn lesson_defaults() -> Self {
        Self {
            age_years: DEFAULT_AGE_YEARS,
            height_m: DEFAULT_HEIGHT_M,
            weight_kg: DEFAULT_WEIGHT_KG,
            bmi: body_mass_index(DEFAULT_HEIGHT_M, DEFAULT_WEIGHT_KG),
        }
    }

    pub fn age(&self) -> u32 {
        self.age_years
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }
}

fn check_measurement(field: &'static str, value: f64) -> Result<(), VitalsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VitalsError::InvalidMeasurement { field, value })
    }
}
