//! Error handling for the lesson.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod lesson_error;
pub mod report_error;
pub mod vitals_error;

pub use config_error::ConfigError;
pub use error_code::LessonErrorCode;
pub use lesson_error::{LessonError, LessonResult};
pub use report_error::ReportError;
pub use vitals_error::VitalsError;
