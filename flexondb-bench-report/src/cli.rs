//! Command-line interface for flexondb-bench-report.

use crate::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flexondb-bench-report")]
#[command(about = "Combine hyperfine benchmark results into a single FlexonDB performance report")]
#[command(version)]
pub struct Cli {
    /// Directory containing the benchmark_*.json files to combine
    pub output_dir: PathBuf,

    /// Output format (defaults to json)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to config file (defaults to .bench-report.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply CLI overrides to the configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.report.format = format;
        }
    }
}
