//! Reading measurement files.
//!
//! A file that cannot be read or parsed is reported and skipped; it never
//! aborts the whole report.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use flexondb_bench_report_core::MeasurementDocument;

/// Errors that can occur while loading a single measurement file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a valid measurement document.
    #[error("Could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse a measurement file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not valid JSON or a field has the wrong type.
pub fn read_measurement_file(path: &Path) -> Result<MeasurementDocument, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a measurement file, logging a warning and returning `None`
/// on failure.
pub fn load_measurement_file(path: &Path) -> Option<MeasurementDocument> {
    match read_measurement_file(path) {
        Ok(document) => Some(document),
        Err(err) => {
            warn!("{err}");
            None
        }
    }
}
