//! flexondb-bench-report: combine per-operation benchmark results
//!
//! This library reads the hyperfine JSON exports written by the FlexonDB
//! benchmark scripts and combines them into a single report with per-benchmark
//! statistics, performance categories and a cross-benchmark summary.

pub mod builder;
pub mod cli;
pub mod config;
pub mod loader;

// Re-export core types for convenience
pub use flexondb_bench_report_core::measurement;
pub use flexondb_bench_report_core::report::{
    BenchmarkEntry, CombinedReport, JsonReporter, ReportError, ReportMetadata, Reporter,
    TerminalReporter,
};
pub use flexondb_bench_report_core::stats::{
    PerformanceCategory, PerformanceDistribution, StatisticsRecord, SummaryRecord,
};

// Re-export main types from this crate
pub use builder::{benchmark_type, BuildError, ReportBuilder};
pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use loader::{load_measurement_file, read_measurement_file, LoadError};
