//! Core types and utilities for flexondb-bench-report.
//!
//! This crate holds the measurement document model read from hyperfine JSON
//! exports, the per-benchmark statistics and performance classification, and
//! the combined report together with the reporters that render it.

pub mod measurement;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use measurement::{MeasurementDocument, RunGroup};
pub use report::{
    BenchmarkEntry, CombinedReport, JsonReporter, ReportError, ReportMetadata, Reporter,
    TerminalReporter,
};
pub use stats::{PerformanceCategory, PerformanceDistribution, StatisticsRecord, SummaryRecord};
