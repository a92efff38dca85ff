use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of a benchmark's mean latency, fastest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCategory {
    /// Under 1 ms.
    Excellent,
    /// 1 ms up to 10 ms.
    Good,
    /// 10 ms up to 100 ms.
    Acceptable,
    /// 100 ms up to 1 s.
    Slow,
    /// 1 s or more.
    VerySlow,
}

impl PerformanceCategory {
    /// Every category, fastest first.
    pub const ALL: [PerformanceCategory; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Acceptable,
        Self::Slow,
        Self::VerySlow,
    ];

    /// Exclusive upper bound in milliseconds for every category except the last.
    const UPPER_BOUNDS_MS: [(f64, PerformanceCategory); 4] = [
        (1.0, Self::Excellent),
        (10.0, Self::Good),
        (100.0, Self::Acceptable),
        (1000.0, Self::Slow),
    ];

    /// Classify a mean duration in milliseconds.
    ///
    /// Picks the first category whose upper bound exceeds the value, so a
    /// value sitting exactly on a boundary lands in the slower category.
    /// Anything not below 1000 ms, NaN included, is [`VerySlow`](Self::VerySlow).
    pub fn from_mean_ms(mean_ms: f64) -> Self {
        Self::UPPER_BOUNDS_MS
            .iter()
            .find(|(upper, _)| mean_ms < *upper)
            .map_or(Self::VerySlow, |(_, category)| *category)
    }

    /// The label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::Slow => "slow",
            Self::VerySlow => "very_slow",
        }
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
