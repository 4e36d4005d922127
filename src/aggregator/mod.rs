//! Aggregation of race data into chart series and metrics.
//!
//! This module transforms a parsed dataset into:
//! - Per-category pace series (for chart generation)
//! - Per-category statistics (for summaries)

pub mod metrics;
pub mod pace;
pub mod series;

// Re-export main types and functions
pub use metrics::{calculate_all_stats, calculate_category_stats, CategoryStats};
pub use pace::{format_min_sec, Pace};
pub use series::{build_series, PacePoint, RaceSeries, SeriesSet};
