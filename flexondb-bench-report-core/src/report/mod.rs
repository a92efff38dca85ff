use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::{PerformanceCategory, StatisticsRecord, SummaryRecord};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Provenance of a combined report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// ISO-8601 time the report was generated.
    pub generated_at: String,
    /// Directory the measurement files were read from.
    pub output_directory: String,
    /// Number of candidate files discovered, whether or not they parsed.
    pub total_files_processed: usize,
    pub flexondb_version: String,
}

/// One benchmark in the combined report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// File name the statistics were read from.
    pub source_file: String,
    pub statistics: StatisticsRecord,
    pub performance_category: PerformanceCategory,
}

impl BenchmarkEntry {
    /// Create an entry, classifying it by its mean time.
    pub fn new(source_file: impl Into<String>, statistics: StatisticsRecord) -> Self {
        Self {
            source_file: source_file.into(),
            performance_category: statistics.category(),
            statistics,
        }
    }
}

/// The aggregated report over every benchmark file in a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    pub metadata: ReportMetadata,
    /// Entries keyed by benchmark type.
    pub benchmarks: BTreeMap<String, BenchmarkEntry>,
    /// Present only when there is at least one benchmark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryRecord>,
}

impl CombinedReport {
    /// Assemble a report, computing the summary from `benchmarks`.
    pub fn new(metadata: ReportMetadata, benchmarks: BTreeMap<String, BenchmarkEntry>) -> Self {
        let summary = SummaryRecord::from_statistics(benchmarks.values().map(|e| &e.statistics));
        Self {
            metadata,
            benchmarks,
            summary,
        }
    }
}

/// Renders a combined report.
pub trait Reporter: Send + Sync {
    /// Write the report to `writer`.
    fn write_report(&self, writer: &mut dyn Write, report: &CombinedReport)
        -> Result<(), ReportError>;

    /// Write the report to stdout.
    fn report(&self, report: &CombinedReport) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        self.write_report(&mut writer, report)?;
        writer.flush()?;
        Ok(())
    }
}

mod json;
mod terminal;
pub use json::JsonReporter;
pub use terminal::TerminalReporter;
