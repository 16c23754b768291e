//! Report output errors.

use super::error_code::{self, LessonErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

impl LessonErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_WRITE_ERROR
    }
}
