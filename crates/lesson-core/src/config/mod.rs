//! Configuration for the lesson.
//! TOML-based; every field optional with compiled defaults.

pub mod lesson_config;
pub mod logging_config;
pub mod vitals_config;

pub use lesson_config::LessonConfig;
pub use logging_config::LoggingConfig;
pub use vitals_config::VitalsConfig;
