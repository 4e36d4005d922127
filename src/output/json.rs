//! JSON series export.
//!
//! Writes the computed series next to the chart so they can be inspected or
//! consumed by other tools.

use crate::aggregator::series::SeriesSet;
use crate::utils::config::SERIES_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level structure of the export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset the series were computed from
    pub source: String,

    /// Timestamp when the export was generated (RFC 3339)
    pub generated_at: String,

    #[serde(flatten)]
    pub data: SeriesSet,
}

impl SeriesExport {
    pub fn new(data: SeriesSet, source: impl Into<String>) -> Self {
        Self {
            version: SERIES_SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// Write series to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_series(export: &SeriesExport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing series to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, export).map_err(OutputError::SerializationFailed)?;

    info!(
        "Series written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a series export back from disk
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_series(input_path: impl AsRef<Path>) -> Result<SeriesExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading series from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let export: SeriesExport =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Series loaded: version {}, {} series",
        export.version,
        export.data.series.len()
    );

    Ok(export)
}
