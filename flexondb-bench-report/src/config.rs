//! Configuration loading for flexondb-bench-report.
//!
//! Supports loading configuration from TOML files, with defaults matching the
//! layout the FlexonDB benchmark scripts write.

use anyhow::{Context, Result};
use clap::ValueEnum;
use glob::{Pattern, PatternError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for flexondb-bench-report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for finding measurement files.
    pub discovery: DiscoveryConfig,
    /// Settings for the generated report.
    pub report: ReportConfig,
}

/// Which files in the results directory are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File name prefix of measurement files.
    pub prefix: String,
    /// File extension of measurement files, without the dot.
    pub extension: String,
}

/// Configuration for the generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Version tag written to `metadata.flexondb_version`.
    pub version: String,
    /// How the report is rendered on stdout.
    pub format: OutputFormat,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// Human-readable table.
    Table,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: "benchmark_".to_string(),
            extension: "json".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            format: OutputFormat::Json,
        }
    }
}

impl DiscoveryConfig {
    /// Glob pattern matching candidate file names: `<prefix>*.<extension>`.
    ///
    /// The prefix and extension are matched literally.
    pub fn file_pattern(&self) -> Result<Pattern, PatternError> {
        Pattern::new(&format!(
            "{}*.{}",
            Pattern::escape(&self.prefix),
            Pattern::escape(&self.extension)
        ))
    }
}

/// Default configuration file name.
const DEFAULT_CONFIG_FILE: &str = ".bench-report.toml";

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `.bench-report.toml` in the current directory,
    /// or use defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load_or_default() -> Result<Config> {
        let path = Path::new(DEFAULT_CONFIG_FILE);

        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from the specified path, or fall back to
    /// [`load_or_default`](Self::load_or_default).
    ///
    /// # Errors
    ///
    /// Returns an error if the specified file cannot be read or parsed.
    pub fn load_from(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_or_default(),
        }
    }
}
