//! Shared constants for the variables lesson.

/// Lesson number in the fundamentals track.
pub const LESSON_ID: u32 = 2;

/// Literal age, in years.
pub const DEFAULT_AGE_YEARS: u32 = 25;

/// Literal height, in meters.
pub const DEFAULT_HEIGHT_M: f64 = 1.75;

/// Literal weight, in kilograms.
pub const DEFAULT_WEIGHT_KG: f64 = 70.5;

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
