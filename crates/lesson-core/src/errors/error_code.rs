//! LessonErrorCode trait for structured error strings.

/// Every error enum implements this to expose a stable code string.
pub trait LessonErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the coded error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_MEASUREMENT: &str = "INVALID_MEASUREMENT";
pub const REPORT_WRITE_ERROR: &str = "REPORT_WRITE_ERROR";
