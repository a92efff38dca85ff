use std::fmt;

use serde::de::{Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A hyperfine JSON export as written by `hyperfine --export-json`.
///
/// Only the fields the report needs are modelled; anything else in the file
/// (`median`, `user`, `system`, `exit_codes`, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasurementDocument {
    /// One entry per benchmarked command; only the first is kept.
    #[serde(default)]
    results: Option<LeadingRun>,
}

impl MeasurementDocument {
    /// The first run group, which is the only one the report reads.
    ///
    /// Returns `None` when `results` is missing, `null`, or empty.
    pub fn first_run(&self) -> Option<&RunGroup> {
        self.results.as_ref().and_then(|leading| leading.0.as_ref())
    }
}

/// The first element of `results`. Later elements are skipped unread, so
/// a malformed trailing run group does not reject the file.
#[derive(Debug, Clone, Default)]
struct LeadingRun(Option<RunGroup>);

impl<'de> Deserialize<'de> for LeadingRun {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LeadingRunVisitor;

        impl<'de> Visitor<'de> for LeadingRunVisitor {
            type Value = LeadingRun;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of run groups")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LeadingRun, A::Error> {
                let first = seq.next_element::<RunGroup>()?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LeadingRun(first))
            }
        }

        deserializer.deserialize_seq(LeadingRunVisitor)
    }
}

/// Measurements for one benchmarked command. Timings are in seconds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunGroup {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub mean: Option<f64>,
    /// hyperfine writes `null` here when only one run was recorded.
    #[serde(default)]
    pub stddev: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Wall-clock time of every individual run.
    #[serde(default)]
    pub times: Option<Vec<f64>>,
    /// Values of `--parameter-scan` / `--parameter-list` variables.
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}
