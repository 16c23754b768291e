//! Variables lesson: age, height, weight, and body-mass index.

use std::io;
use std::process::ExitCode;

use lesson_core::{init_tracing, LessonConfig, Report, Vitals};

fn main() -> ExitCode {
    let config = LessonConfig::default();
    init_tracing(config.logging.effective_level());

    let vitals = Vitals::lesson_defaults();

    let _span = tracing::info_span!("lesson.report", bmi = vitals.bmi()).entered();
    if let Err(e) = Report::new(&vitals).write_to(&mut io::stdout().lock()) {
        // Output failures do not change the exit status.
        tracing::error!(error = %e, "failed to write report");
    }

    ExitCode::SUCCESS
}
