//! Race Pace CLI
//!
//! Renders an interactive pace-over-time chart from a race-results dataset.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use race_pace::chart::{load_chart_config, ChartConfig};
use race_pace::commands::{
    display_version, execute_plot, validate_args, validate_dataset_file, PlotArgs,
};
use race_pace::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Race Pace - pace-over-time charts for race results
#[derive(Parser, Debug)]
#[command(name = "race-pace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the pace chart
    Plot {
        /// Race dataset JSON
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output path for the HTML chart
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Also export computed series as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Chart configuration TOML
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Shade this calendar year (repeatable)
        #[arg(long = "year")]
        years: Vec<i32>,

        /// Inline this plotly.js bundle instead of loading it from the CDN
        #[arg(long, env = "RACE_PACE_PLOTLY_JS")]
        plotly_js: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a dataset JSON file
    Validate {
        /// Path to dataset JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Plot {
            input,
            output,
            json,
            config,
            title,
            years,
            plotly_js,
            summary,
        } => {
            // Defaults, then the config file, then CLI flags
            let mut chart_config = match config {
                Some(path) => load_chart_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ChartConfig::new(),
            };

            if let Some(title_str) = title {
                chart_config = chart_config.with_title(title_str);
            }

            chart_config = chart_config.with_years(years);

            if let Some(path) = plotly_js {
                chart_config = chart_config.with_plotly_js(path);
            }

            let args = PlotArgs {
                input,
                output_html: output,
                output_json: json,
                chart_config,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_plot(args)?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
