use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use super::{PerformanceCategory, StatisticsRecord};

/// Number of benchmarks falling into each performance category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceDistribution {
    pub excellent: usize,
    pub good: usize,
    pub acceptable: usize,
    pub slow: usize,
    pub very_slow: usize,
}

impl PerformanceDistribution {
    /// Count one benchmark in `category`.
    pub fn record(&mut self, category: PerformanceCategory) {
        *self.slot(category) += 1;
    }

    /// Number of benchmarks in `category`.
    pub fn count(&self, category: PerformanceCategory) -> usize {
        match category {
            PerformanceCategory::Excellent => self.excellent,
            PerformanceCategory::Good => self.good,
            PerformanceCategory::Acceptable => self.acceptable,
            PerformanceCategory::Slow => self.slow,
            PerformanceCategory::VerySlow => self.very_slow,
        }
    }

    /// Total number of benchmarks counted.
    pub fn total(&self) -> usize {
        PerformanceCategory::ALL
            .iter()
            .map(|category| self.count(*category))
            .sum()
    }

    fn slot(&mut self, category: PerformanceCategory) -> &mut usize {
        match category {
            PerformanceCategory::Excellent => &mut self.excellent,
            PerformanceCategory::Good => &mut self.good,
            PerformanceCategory::Acceptable => &mut self.acceptable,
            PerformanceCategory::Slow => &mut self.slow,
            PerformanceCategory::VerySlow => &mut self.very_slow,
        }
    }
}

impl FromIterator<PerformanceCategory> for PerformanceDistribution {
    fn from_iter<I: IntoIterator<Item = PerformanceCategory>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for category in iter {
            distribution.record(category);
        }
        distribution
    }
}

/// Aggregate statistics across every benchmark in a report.
///
/// The `*_operation` and `average_time_ms` fields are taken over the
/// per-benchmark mean times, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub total_benchmarks: usize,
    pub total_test_runs: usize,
    /// Lowest mean time.
    pub fastest_operation: f64,
    /// Highest mean time.
    pub slowest_operation: f64,
    /// Arithmetic mean of the mean times.
    pub average_time_ms: f64,
    pub performance_distribution: PerformanceDistribution,
}

impl SummaryRecord {
    /// Summarize a set of statistics records.
    ///
    /// Returns `None` when there are no records. The distribution is
    /// classified afresh from each mean rather than read from stored entries.
    pub fn from_statistics<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a StatisticsRecord>,
    {
        let mut means = Vec::new();
        let mut total_test_runs = 0;
        for record in records {
            means.push(record.mean_ms);
            total_test_runs += record.runs;
        }

        if means.is_empty() {
            return None;
        }

        let fastest_operation = Statistics::min(&means);
        let slowest_operation = Statistics::max(&means);
        // Summation rounding can land the average an ulp outside [min, max].
        let average_time_ms = (means.iter().sum::<f64>() / means.len() as f64)
            .max(fastest_operation)
            .min(slowest_operation);

        Some(Self {
            total_benchmarks: means.len(),
            total_test_runs,
            fastest_operation,
            slowest_operation,
            average_time_ms,
            performance_distribution: means
                .iter()
                .map(|mean_ms| PerformanceCategory::from_mean_ms(*mean_ms))
                .collect(),
        })
    }
}
