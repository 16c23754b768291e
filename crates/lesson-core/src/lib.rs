//! # lesson-core
//!
//! Foundation crate for the variables lesson.
//! Defines the vitals model, report rendering, lesson checks, config,
//! errors, tracing, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lesson;
pub mod report;
pub mod tracing;
pub mod vitals;

// Re-export the most commonly used types at the crate root.
pub use config::LessonConfig;
pub use errors::{LessonError, LessonResult};
pub use lesson::{feedback, Lesson, TestCase, TestResult};
pub use report::Report;
pub use self::tracing::init_tracing;
pub use vitals::Vitals;
