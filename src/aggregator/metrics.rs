//! Per-category statistics over computed series.

use super::pace::Pace;
use super::series::{PacePoint, RaceSeries, SeriesSet};
use chrono::NaiveDate;
use log::debug;

/// Summary of one category
///
/// **Public** - returned from calculate_category_stats
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryStats {
    pub category: String,

    /// Number of plotted races
    pub race_count: usize,

    /// Fastest pace and the race it was run in
    pub best: Option<(Pace, String)>,

    /// Mean of the per-race paces
    pub mean: Option<Pace>,

    /// Date of the most recent race
    pub latest: Option<NaiveDate>,
}

impl CategoryStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let best = self
            .best
            .as_ref()
            .map(|(pace, name)| format!("{} ({})", pace.format_km(), name))
            .unwrap_or_else(|| "-".to_string());
        let mean = self
            .mean
            .map(|p| p.format_km())
            .unwrap_or_else(|| "-".to_string());
        let latest = self
            .latest
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} | Races: {} | Best: {} | Mean: {} | Latest: {}",
            self.category, self.race_count, best, mean, latest
        )
    }
}

/// Calculate statistics for a single series
pub fn calculate_category_stats(series: &RaceSeries) -> CategoryStats {
    if series.is_empty() {
        return CategoryStats {
            category: series.category.clone(),
            ..Default::default()
        };
    }

    // First minimum wins on ties so the earliest race keeps the record
    let best = series
        .points
        .iter()
        .fold(None::<&PacePoint>, |best, p| match best {
            Some(b) if b.pace <= p.pace => Some(b),
            _ => Some(p),
        })
        .map(|p| (p.pace, p.name.clone()));

    let total: f64 = series.points.iter().map(|p| p.pace.seconds_per_km()).sum();
    let mean = Pace::from_seconds_per_km(total / series.len() as f64);

    let latest = series.points.iter().map(|p| p.date).max();

    CategoryStats {
        category: series.category.clone(),
        race_count: series.len(),
        best,
        mean: Some(mean),
        latest,
    }
}

/// Calculate statistics for every series, in series order
pub fn calculate_all_stats(set: &SeriesSet) -> Vec<CategoryStats> {
    debug!("Calculating statistics for {} series", set.series.len());

    set.series.iter().map(calculate_category_stats).collect()
}
