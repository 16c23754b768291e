//! Vitals construction errors.

use super::error_code::{self, LessonErrorCode};

/// Errors raised when measurements cannot produce a body-mass index.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    #[error("Invalid measurement for {field}: {value} (must be finite and greater than 0)")]
    InvalidMeasurement { field: &'static str, value: f64 },
}

impl LessonErrorCode for VitalsError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_MEASUREMENT
    }
}
