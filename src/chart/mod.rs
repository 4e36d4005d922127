//! Chart generation for plotly.js.
//!
//! This module converts pace series into an interactive HTML chart:
//! one trace per race category, per-km and per-mile pace axes and
//! shaded bands for highlighted years.

pub mod axis;
pub mod config;
pub mod figure;
pub mod html;

// Re-export main types
pub use axis::{pace_ticks, Ticks};
pub use config::{load_chart_config, ChartConfig};
pub use figure::{build_figure, Figure};
pub use html::render_html;

use crate::aggregator::series::SeriesSet;
use crate::utils::error::ChartError;

/// Build the figure and render it as an HTML document in one step
pub fn generate_chart(set: &SeriesSet, config: &ChartConfig) -> Result<String, ChartError> {
    let figure = build_figure(set, config)?;
    render_html(&figure, config)
}
