//! Four-line labeled report written to standard output.

use std::fmt;
use std::io::Write;

use crate::errors::ReportError;
use crate::vitals::Vitals;

/// Renders vitals as:
///
/// ```text
/// Age: 25 years
/// Height: 1.75 meters
/// Weight: 70.5 kg
/// BMI: 23.0
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    vitals: &'a Vitals,
}

impl<'a> Report<'a> {
    pub fn new(vitals: &'a Vitals) -> Self {
        Self { vitals }
    }

    /// The report lines, in output order, without terminators.
    pub fn lines(&self) -> [String; 4] {
        let v = self.vitals;
        [
            format!("Age: {} years", v.age()),
            format!("Height: {:.2} meters", v.height_m()),
            format!("Weight: {:.1} kg", v.weight_kg()),
            format!("BMI: {:.1}", v.bmi()),
        ]
    }

    /// Write the full report and flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
