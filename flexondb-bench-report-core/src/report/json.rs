use std::io::Write;

use super::{CombinedReport, ReportError, Reporter};

/// Writes the report as pretty-printed JSON with 2-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for JsonReporter {
    fn write_report(
        &self,
        writer: &mut dyn Write,
        report: &CombinedReport,
    ) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        Ok(())
    }
}
