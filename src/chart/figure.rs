//! plotly.js figure model.
//!
//! These structs serialize straight into the `data` / `layout` objects that
//! `Plotly.newPlot` expects. Only the attributes we set are modelled.

use super::axis::{pace_ticks, Ticks};
use super::config::ChartConfig;
use crate::aggregator::series::{RaceSeries, SeriesSet};
use crate::utils::config::KM_PER_MILE;
use crate::utils::error::ChartError;
use log::{debug, info, warn};
use serde::Serialize;

/// Complete figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// A scatter trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub text: Vec<String>,
    pub hovertext: Vec<String>,
    pub hoverinfo: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub hovermode: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub yaxis2: Axis,
    pub shapes: Vec<Shape>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis range: dates for the x-axis, paces for the y-axes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisRange {
    Dates([String; 2]),
    Values([f64; 2]),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub range: AxisRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridwidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
}

impl Axis {
    fn date(title: &str, start: &str, end: &str) -> Self {
        Self {
            title: Title::new(title),
            kind: Some("date"),
            range: AxisRange::Dates([start.to_string(), end.to_string()]),
            gridwidth: None,
            tickmode: None,
            tickvals: None,
            ticktext: None,
            overlaying: None,
            side: None,
            showgrid: None,
        }
    }

    /// Inverted pace axis: faster paces at the top
    fn pace(title: &str, fastest: f64, slowest: f64, ticks: Ticks) -> Self {
        Self {
            title: Title::new(title),
            kind: None,
            range: AxisRange::Values([slowest, fastest]),
            gridwidth: None,
            tickmode: Some("array"),
            tickvals: Some(ticks.values),
            ticktext: Some(ticks.labels),
            overlaying: None,
            side: None,
            showgrid: None,
        }
    }
}

/// Layout shape (used for year bands)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: String,
    pub x1: String,
    pub y0: f64,
    pub y1: f64,
    pub fillcolor: String,
    pub opacity: f64,
    pub layer: &'static str,
    pub line: ShapeLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
}

/// Build the figure for a set of series
///
/// **Public** - main entry point for chart generation
///
/// A set without any plottable race still yields a figure: empty traces
/// over the configured axes and bands.
///
/// # Errors
/// * `ChartError::InvalidConfig` - see [`ChartConfig::validate`]
pub fn build_figure(set: &SeriesSet, config: &ChartConfig) -> Result<Figure, ChartError> {
    config.validate()?;

    if set.is_empty() {
        warn!("No races to plot; rendering empty chart");
    }

    info!(
        "Building figure: {} series, {} races",
        set.series.len(),
        set.total_points()
    );

    let mut data: Vec<Trace> = set.series.iter().map(series_trace).collect();
    data.push(mile_axis_anchor(config));

    let layout = Layout {
        title: Title::new(config.title.clone()),
        hovermode: "closest",
        xaxis: Axis::date("Date", &config.x_start, &config.x_end),
        yaxis: Axis {
            gridwidth: Some(5),
            ..Axis::pace(
                "Pace (min/km)",
                config.pace_min,
                config.pace_max,
                pace_ticks(config.pace_min, config.pace_max, config.km_tick_seconds),
            )
        },
        yaxis2: Axis {
            overlaying: Some("y"),
            side: Some("right"),
            showgrid: Some(false),
            ..Axis::pace(
                "Pace (min/mile)",
                config.pace_min * KM_PER_MILE,
                config.pace_max * KM_PER_MILE,
                pace_ticks(
                    config.pace_min * KM_PER_MILE,
                    config.pace_max * KM_PER_MILE,
                    config.mile_tick_seconds,
                ),
            )
        },
        shapes: year_bands(config),
        legend: Legend { orientation: "h" },
    };

    Ok(Figure { data, layout })
}

/// One line+marker+text trace per category, on the per-km axis
fn series_trace(series: &RaceSeries) -> Trace {
    debug!(
        "Trace '{}': {} points",
        series.category,
        series.points.len()
    );

    Trace {
        kind: "scatter",
        name: series.category.clone(),
        x: series.points.iter().map(|p| p.date.to_string()).collect(),
        y: series.points.iter().map(|p| p.pace.minutes_per_km()).collect(),
        mode: "lines+markers+text",
        text: series.points.iter().map(|p| p.label.clone()).collect(),
        hovertext: series.points.iter().map(|p| p.hover.clone()).collect(),
        hoverinfo: "text",
        textposition: Some("top center"),
        yaxis: None,
        showlegend: None,
        marker: None,
    }
}

/// Invisible point bound to the per-mile axis
///
/// plotly.js only draws an overlaying axis that has a trace attached.
fn mile_axis_anchor(config: &ChartConfig) -> Trace {
    Trace {
        kind: "scatter",
        name: "min/mile".to_string(),
        x: vec![config.x_start.clone()],
        y: vec![config.pace_max * KM_PER_MILE],
        mode: "markers",
        text: Vec::new(),
        hovertext: Vec::new(),
        hoverinfo: "skip",
        textposition: None,
        yaxis: Some("y2"),
        showlegend: Some(false),
        marker: Some(Marker { opacity: 0.0 }),
    }
}

/// One full-height shaded rectangle per highlighted calendar year
fn year_bands(config: &ChartConfig) -> Vec<Shape> {
    config
        .highlight_years
        .iter()
        .map(|year| Shape {
            kind: "rect",
            xref: "x",
            yref: "paper",
            x0: format!("{:04}-01-01", year),
            x1: format!("{:04}-01-01", year.saturating_add(1)),
            y0: 0.0,
            y1: 1.0,
            fillcolor: config.band_color.clone(),
            opacity: config.band_opacity,
            layer: "below",
            line: ShapeLine { width: 0.0 },
        })
        .collect()
}
