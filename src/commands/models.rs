use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Race dataset JSON
    pub input: PathBuf,

    /// Output path for the HTML chart
    pub output_html: PathBuf,

    /// Output path for the JSON series export (optional)
    pub output_json: Option<PathBuf>,

    /// Chart configuration (defaults, TOML file and CLI overrides merged)
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output_html: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_json: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}
