//! Chart configuration.
//!
//! Defaults reproduce the classic chart. Any field can be overridden from a
//! TOML file, for example:
//!
//! ```toml
//! title = "Road races"
//! x_start = "2015-01-01"
//! x_end = "2020-01-01"
//! pace_min = 3.25
//! pace_max = 5.5
//! highlight_years = [2016, 2018]
//! ```

use crate::utils::config::{
    DEFAULT_BAND_COLOR, DEFAULT_BAND_OPACITY, DEFAULT_KM_TICK_SECONDS, DEFAULT_MILE_TICK_SECONDS,
    DEFAULT_PACE_MAX, DEFAULT_PACE_MIN, DEFAULT_TITLE, DEFAULT_X_END, DEFAULT_X_START,
    KM_PER_MILE, MAX_AXIS_TICKS, MAX_HIGHLIGHT_YEAR, MIN_HIGHLIGHT_YEAR,
};
use crate::utils::error::{ChartError, ConfigError};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,

    /// First date shown on the x-axis (`YYYY-MM-DD`)
    pub x_start: String,

    /// Last date shown on the x-axis (`YYYY-MM-DD`)
    pub x_end: String,

    /// Fastest pace shown, min/km (top of the inverted axis)
    pub pace_min: f64,

    /// Slowest pace shown, min/km (bottom of the inverted axis)
    pub pace_max: f64,

    /// Tick spacing on the per-km axis, in seconds
    pub km_tick_seconds: u32,

    /// Tick spacing on the per-mile axis, in seconds
    pub mile_tick_seconds: u32,

    /// Calendar years drawn as shaded bands
    pub highlight_years: Vec<i32>,

    pub band_color: String,
    pub band_opacity: f64,

    /// Local plotly.js bundle to inline instead of referencing the CDN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plotly_js: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_start: DEFAULT_X_START.to_string(),
            x_end: DEFAULT_X_END.to_string(),
            pace_min: DEFAULT_PACE_MIN,
            pace_max: DEFAULT_PACE_MAX,
            km_tick_seconds: DEFAULT_KM_TICK_SECONDS,
            mile_tick_seconds: DEFAULT_MILE_TICK_SECONDS,
            highlight_years: Vec::new(),
            band_color: DEFAULT_BAND_COLOR.to_string(),
            band_opacity: DEFAULT_BAND_OPACITY,
            plotly_js: None,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add highlighted years, keeping the list sorted and free of duplicates
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.highlight_years.extend(years);
        self.highlight_years.sort_unstable();
        self.highlight_years.dedup();
        self
    }

    pub fn with_x_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.x_start = start.into();
        self.x_end = end.into();
        self
    }

    pub fn with_pace_range(mut self, pace_min: f64, pace_max: f64) -> Self {
        self.pace_min = pace_min;
        self.pace_max = pace_max;
        self
    }

    pub fn with_plotly_js(mut self, path: impl Into<PathBuf>) -> Self {
        self.plotly_js = Some(path.into());
        self
    }

    /// Check that ranges are well-formed
    ///
    /// # Errors
    /// * `ChartError::InvalidConfig` - describing the first problem found
    pub fn validate(&self) -> Result<(), ChartError> {
        let start = parse_date("x_start", &self.x_start)?;
        let end = parse_date("x_end", &self.x_end)?;
        if start >= end {
            return Err(ChartError::InvalidConfig(format!(
                "x_start ({}) must be before x_end ({})",
                self.x_start, self.x_end
            )));
        }

        if !(self.pace_min.is_finite() && self.pace_max.is_finite())
            || self.pace_min <= 0.0
            || self.pace_min >= self.pace_max
        {
            return Err(ChartError::InvalidConfig(format!(
                "pace range must satisfy 0 < pace_min < pace_max (got {} .. {})",
                self.pace_min, self.pace_max
            )));
        }

        if self.km_tick_seconds == 0 || self.mile_tick_seconds == 0 {
            return Err(ChartError::InvalidConfig(
                "tick spacing must be at least one second".to_string(),
            ));
        }

        let span_seconds = (self.pace_max - self.pace_min) * 60.0;
        let km_ticks = span_seconds / f64::from(self.km_tick_seconds);
        let mile_ticks = span_seconds * KM_PER_MILE / f64::from(self.mile_tick_seconds);
        if km_ticks > MAX_AXIS_TICKS || mile_ticks > MAX_AXIS_TICKS {
            return Err(ChartError::InvalidConfig(format!(
                "pace range {} .. {} needs more than {} axis ticks; widen the tick spacing",
                self.pace_min, self.pace_max, MAX_AXIS_TICKS
            )));
        }

        if !(0.0..=1.0).contains(&self.band_opacity) {
            return Err(ChartError::InvalidConfig(format!(
                "band_opacity must be within 0..=1 (got {})",
                self.band_opacity
            )));
        }

        if let Some(year) = self
            .highlight_years
            .iter()
            .find(|y| !(MIN_HIGHLIGHT_YEAR..=MAX_HIGHLIGHT_YEAR).contains(*y))
        {
            return Err(ChartError::InvalidConfig(format!(
                "highlighted year {} outside {}..={}",
                year, MIN_HIGHLIGHT_YEAR, MAX_HIGHLIGHT_YEAR
            )));
        }

        Ok(())
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        ChartError::InvalidConfig(format!("{} '{}' is not a YYYY-MM-DD date: {}", field, value, e))
    })
}

/// Load a chart configuration from a TOML file
///
/// Missing fields fall back to their defaults.
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::TomlParseFailed` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_chart_config("chart.toml")?;
/// ```
pub fn load_chart_config(path: impl AsRef<Path>) -> Result<ChartConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading chart config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: ChartConfig = toml::from_str(&contents)?;
    Ok(config)
}
