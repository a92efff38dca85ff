use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::measurement::{MeasurementDocument, RunGroup};

const MS_PER_SECOND: f64 = 1000.0;

/// Command label used when a run group does not name its command.
pub const UNKNOWN_COMMAND: &str = "unknown";

/// Normalized statistics for one benchmark, with all timings in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    pub command: String,
    pub mean_ms: f64,
    pub stddev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Number of individual runs recorded.
    pub runs: usize,
    pub parameters: Map<String, Value>,
}

impl StatisticsRecord {
    /// Extract statistics from the first run group of a measurement document.
    ///
    /// Returns `None` if the document has no run groups.
    pub fn extract(document: &MeasurementDocument) -> Option<Self> {
        document.first_run().map(Self::from_run)
    }

    /// Convert a single run group, filling absent fields with their defaults:
    /// 0 for timings and run count, an empty map for parameters.
    pub fn from_run(run: &RunGroup) -> Self {
        let to_ms = |seconds: Option<f64>| seconds.unwrap_or(0.0) * MS_PER_SECOND;

        Self {
            command: run
                .command
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMMAND.to_string()),
            mean_ms: to_ms(run.mean),
            stddev_ms: to_ms(run.stddev),
            min_ms: to_ms(run.min),
            max_ms: to_ms(run.max),
            runs: run.times.as_ref().map_or(0, Vec::len),
            parameters: run.parameters.clone().unwrap_or_default(),
        }
    }

    /// Performance category of this benchmark's mean time.
    pub fn category(&self) -> PerformanceCategory {
        PerformanceCategory::from_mean_ms(self.mean_ms)
    }
}

mod category;
mod summary;
pub use category::PerformanceCategory;
pub use summary::{PerformanceDistribution, SummaryRecord};
