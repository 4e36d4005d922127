//! Plot command implementation.
//!
//! The plot command:
//! 1. Loads and validates the dataset
//! 2. Builds per-category pace series
//! 3. Calculates per-category statistics
//! 4. Renders the HTML chart
//! 5. Writes output files
//!
//! Nothing is written unless every step before it succeeds.

use crate::aggregator::{build_series, calculate_all_stats};
use crate::chart::generate_chart;
use crate::commands::models::PlotArgs;
use crate::commands::summary::generate_text_summary;
use crate::output::{write_html, write_series, SeriesExport};
use crate::parser::load_dataset;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset read or parse failures
/// * Malformed chip times
/// * Invalid chart configuration
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = PlotArgs {
///     input: PathBuf::from("races.json"),
///     output_html: PathBuf::from("races.html"),
///     ..Default::default()
/// };
///
/// execute_plot(args)?;
/// ```
pub fn execute_plot(args: PlotArgs) -> Result<()> {
    let start_time = Instant::now();

    let dataset = load_dataset(&args.input)
        .with_context(|| format!("Failed to load dataset {}", args.input.display()))?;

    info!("Computing paces...");
    let series = build_series(&dataset).context("Failed to compute paces")?;

    if !series.skipped.is_empty() {
        info!(
            "{} race(s) left out: category not listed in distances",
            series.skipped.len()
        );
    }

    let stats = calculate_all_stats(&series);
    for s in &stats {
        debug!("{}", s.summary());
    }

    info!("Rendering chart...");
    let html = generate_chart(&series, &args.chart_config).context("Failed to render chart")?;

    write_html(&html, &args.output_html).context("Failed to write chart HTML")?;
    info!("✓ Chart written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        let export = SeriesExport::new(series, args.input.display().to_string());
        write_series(&export, json_path).context("Failed to write series JSON")?;
        info!("✓ Series written to: {}", json_path.display());
    }

    if args.print_summary {
        println!("{}", generate_text_summary(&stats));
    }

    info!(
        "Plot completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_html.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output_html {
        anyhow::bail!("Output path must differ from the input dataset");
    }

    if let Some(json_path) = &args.output_json {
        if json_path == &args.input || json_path == &args.output_html {
            anyhow::bail!("JSON export path must differ from the input and chart paths");
        }
    }

    args.chart_config
        .validate()
        .context("Invalid chart configuration")?;

    Ok(())
}
