//! Top-level lesson error.

use super::error_code::LessonErrorCode;
use super::{ConfigError, ReportError, VitalsError};

#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vitals(#[from] VitalsError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type LessonResult<T> = Result<T, LessonError>;

impl LessonErrorCode for LessonError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Vitals(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
