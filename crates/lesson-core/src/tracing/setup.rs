//! Tracing initialization.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::DEFAULT_LOG_LEVEL;

static INIT: Once = Once::new();

/// Initialize logging with the given filter directive, e.g. `lesson_core=debug`.
///
/// Falls back to `warn` if the directive is invalid. Output is written to
/// stderr so standard output carries only the report.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(directive: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
