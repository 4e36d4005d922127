//! Configuration and constants for the CLI.

/// Dataset read when no `--input` is given
pub const DEFAULT_INPUT_FILE: &str = "races.json";

/// Chart written when no `--output` is given
pub const DEFAULT_OUTPUT_FILE: &str = "races.html";

/// Current schema version of the JSON series export
pub const SERIES_SCHEMA_VERSION: &str = "1.0.0";

// Fixed conversion used for per-mile pace: 1 mile = 1.609 km
pub const KM_PER_MILE: f64 = 1.609;

// Default chart layout
pub const DEFAULT_TITLE: &str = "Races";
pub const DEFAULT_X_START: &str = "2014-01-01";
pub const DEFAULT_X_END: &str = "2018-01-01";
pub const DEFAULT_PACE_MIN: f64 = 3.5; // min/km, top of the inverted axis
pub const DEFAULT_PACE_MAX: f64 = 5.0; // min/km, bottom of the inverted axis
pub const DEFAULT_KM_TICK_SECONDS: u32 = 10;
pub const DEFAULT_MILE_TICK_SECONDS: u32 = 15;

/// Upper bound on ticks generated for either pace axis
pub const MAX_AXIS_TICKS: f64 = 1000.0;
pub const DEFAULT_BAND_COLOR: &str = "rgb(200, 200, 200)";
pub const DEFAULT_BAND_OPACITY: f64 = 0.25;

/// Years accepted for highlighted bands
pub const MIN_HIGHLIGHT_YEAR: i32 = 1900;
pub const MAX_HIGHLIGHT_YEAR: i32 = 2100;

/// plotly.js bundle referenced when no local copy is inlined
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// DOM id of the chart container
pub const CHART_DIV_ID: &str = "race-pace-chart";
