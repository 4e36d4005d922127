//! HTML chart output writer.

use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an HTML document to a file
///
/// **Public** - main entry point for chart output
///
/// # Arguments
/// * `html_content` - document from the chart renderer
/// * `output_path` - Path to output HTML file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let html = generate_chart(&series, &ChartConfig::default())?;
/// write_html(&html, "races.html")?;
/// ```
pub fn write_html(html_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(html_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    let file_size = html_content.len();
    info!(
        "Chart written successfully ({} bytes, {:.2} KB)",
        file_size,
        file_size as f64 / 1024.0
    );

    Ok(())
}
