//! Report builder for combining measurement files.
//!
//! The builder discovers measurement files in a results directory, extracts
//! and classifies the statistics of each one in sorted order, and assembles
//! them into a [`CombinedReport`] with a cross-benchmark summary.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use chrono::Local;
use glob::{Pattern, PatternError};
use thiserror::Error;
use tracing::{debug, warn};

use flexondb_bench_report_core::{BenchmarkEntry, CombinedReport, ReportMetadata, StatisticsRecord};

use crate::config::Config;
use crate::loader::load_measurement_file;

/// Errors that prevent a report from being generated.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The results directory does not exist.
    #[error("Output directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The results directory holds no measurement files.
    #[error("No benchmark JSON files found in {}", .0.display())]
    NoCandidates(PathBuf),

    /// The results directory could not be listed.
    #[error("Failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configured file name pattern is invalid.
    #[error("Invalid file name pattern: {0}")]
    Pattern(#[from] PatternError),
}

/// Builds combined reports from a directory of measurement files.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    /// Matches candidate file names.
    pattern: Pattern,
    /// Version tag written into the report metadata.
    version: String,
}

impl ReportBuilder {
    /// Create a builder from the discovery and report settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured prefix and extension do not form a
    /// valid file name pattern.
    pub fn new(config: &Config) -> Result<Self, BuildError> {
        Ok(Self {
            pattern: config.discovery.file_pattern()?,
            version: config.report.version.clone(),
        })
    }

    /// List the measurement files directly inside `dir`, sorted by path.
    ///
    /// Only regular files (or symlinks to them) whose name matches the
    /// configured pattern are returned. Subdirectories are not searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let read_dir_error = |source| BuildError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let name = entry.file_name();
            let matches = name.to_str().is_some_and(|name| self.pattern.matches(name));
            let path = entry.path();
            if matches && path.is_file() {
                candidates.push(path);
            }
        }

        // read_dir order is platform dependent
        candidates.sort();
        Ok(candidates)
    }

    /// Build the combined report for `dir`.
    ///
    /// Files that cannot be loaded or hold no results are logged and skipped.
    /// When two files share a benchmark type, the later one in sorted order
    /// replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DirectoryNotFound`] if `dir` is not a directory
    /// and [`BuildError::NoCandidates`] if it contains no measurement files.
    pub fn build(&self, dir: &Path) -> Result<CombinedReport, BuildError> {
        if !dir.is_dir() {
            return Err(BuildError::DirectoryNotFound(dir.to_path_buf()));
        }

        let candidates = self.discover(dir)?;
        if candidates.is_empty() {
            warn!("No benchmark JSON files found in {}", dir.display());
            return Err(BuildError::NoCandidates(dir.to_path_buf()));
        }
        debug!("Found {} benchmark file(s) in {}", candidates.len(), dir.display());

        let mut benchmarks = BTreeMap::new();
        for path in &candidates {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let benchmark = benchmark_type(&file_name).to_string();

            let Some(document) = load_measurement_file(path) else {
                continue;
            };
            let Some(statistics) = StatisticsRecord::extract(&document) else {
                warn!("No results in {}, skipping", path.display());
                continue;
            };

            let entry = BenchmarkEntry::new(file_name, statistics);
            debug!(
                "{}: {:.3} ms over {} run(s), {}",
                benchmark, entry.statistics.mean_ms, entry.statistics.runs, entry.performance_category
            );
            if let Some(previous) = benchmarks.insert(benchmark.clone(), entry) {
                debug!(
                    "{} replaces {} for benchmark type '{}'",
                    path.display(),
                    previous.source_file,
                    benchmark
                );
            }
        }

        let metadata = ReportMetadata {
            generated_at: Local::now().to_rfc3339(),
            output_directory: normalized_display(dir),
            total_files_processed: candidates.len(),
            flexondb_version: self.version.clone(),
        };

        Ok(CombinedReport::new(metadata, benchmarks))
    }
}

/// `dir` without `.` components, repeated separators or a trailing
/// separator, e.g. `results` for `./results/`.
fn normalized_display(dir: &Path) -> String {
    let normalized: PathBuf = dir
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        ".".to_string()
    } else {
        normalized.display().to_string()
    }
}

/// Benchmark type encoded in a measurement file name: its second
/// `_`-separated token, e.g. `create` for `benchmark_create_001.json`.
///
/// A name without an underscore is used whole.
pub fn benchmark_type(file_name: &str) -> &str {
    file_name.split('_').nth(1).unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn builder() -> ReportBuilder {
        ReportBuilder::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_benchmark_type() {
        assert_eq!(benchmark_type("benchmark_create_001.json"), "create");
        assert_eq!(benchmark_type("benchmark_insert_1.json"), "insert");
        assert_eq!(benchmark_type("benchmark_create.json"), "create.json");
        assert_eq!(benchmark_type("benchmark_.json"), ".json");
        assert_eq!(benchmark_type("results.json"), "results.json");
    }

    #[cfg(unix)]
    #[test]
    fn test_normalized_display() {
        assert_eq!(normalized_display(Path::new("./results/")), "results");
        assert_eq!(normalized_display(Path::new("results")), "results");
        assert_eq!(normalized_display(Path::new(".")), ".");
        assert_eq!(normalized_display(Path::new("./")), ".");
        assert_eq!(normalized_display(Path::new("a//b/./c/")), "a/b/c");
        assert_eq!(normalized_display(Path::new("../bench/")), "../bench");
        assert_eq!(normalized_display(Path::new("/tmp/results/")), "/tmp/results");
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in [
            "benchmark_select_1.json",
            "benchmark_create_1.json",
            "benchmark_insert_1.json",
            "benchmark_notes.txt",
            "summary.json",
            "old_benchmark_create_1.json",
        ] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("benchmark_nested.json")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/benchmark_delete_1.json"), "{}").unwrap();

        let names: Vec<String> = builder()
            .discover(dir.path())
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "benchmark_create_1.json",
                "benchmark_insert_1.json",
                "benchmark_select_1.json",
            ]
        );
    }

    #[test]
    fn test_discover_with_custom_pattern() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("perf_scan_1.hf"), "{}").unwrap();
        fs::write(dir.path().join("benchmark_scan_1.json"), "{}").unwrap();

        let mut config = Config::default();
        config.discovery.prefix = "perf_".to_string();
        config.discovery.extension = "hf".to_string();
        let candidates = ReportBuilder::new(&config)
            .unwrap()
            .discover(dir.path())
            .unwrap();

        assert_eq!(candidates, vec![dir.path().join("perf_scan_1.hf")]);
    }

    #[test]
    fn test_build_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = builder().build(&missing);
        assert!(matches!(result, Err(BuildError::DirectoryNotFound(path)) if path == missing));
    }

    #[test]
    fn test_build_file_instead_of_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("benchmark_create_1.json");
        fs::write(&file, "{}").unwrap();

        assert!(matches!(
            builder().build(&file),
            Err(BuildError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_build_without_candidates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# results").unwrap();

        assert!(matches!(
            builder().build(dir.path()),
            Err(BuildError::NoCandidates(_))
        ));
    }

    #[test]
    fn test_build_counts_skipped_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("benchmark_create_1.json"), "{ broken").unwrap();
        fs::write(dir.path().join("benchmark_insert_1.json"), r#"{"results": []}"#).unwrap();

        let report = builder().build(dir.path()).unwrap();

        assert_eq!(report.metadata.total_files_processed, 2);
        assert!(report.benchmarks.is_empty());
        assert!(report.summary.is_none());
    }

    #[test]
    fn test_build_metadata() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("benchmark_create_1.json"),
            r#"{"results": [{"mean": 0.002, "times": [0.002, 0.002]}]}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.report.version = "1.2.3".to_string();
        let report = ReportBuilder::new(&config).unwrap().build(dir.path()).unwrap();

        assert_eq!(report.metadata.flexondb_version, "1.2.3");
        assert_eq!(report.metadata.output_directory, dir.path().display().to_string());
        assert_eq!(report.metadata.total_files_processed, 1);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.metadata.generated_at).is_ok());

        let entry = &report.benchmarks["create"];
        assert_eq!(entry.source_file, "benchmark_create_1.json");
        assert_eq!(entry.statistics.mean_ms, 2.0);
        assert_eq!(entry.statistics.runs, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_normalizes_output_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("benchmark_create_1.json"),
            r#"{"results": [{"mean": 0.002}]}"#,
        )
        .unwrap();
        let with_slash = PathBuf::from(format!("{}/", dir.path().display()));

        let report = builder().build(&with_slash).unwrap();

        assert_eq!(report.metadata.output_directory, dir.path().display().to_string());
    }
}
