//! Turn a dataset into per-category chart series.
//!
//! Each series holds one point per race of that category, in dataset order.
//! Series come out in the key order of the `distances` object.
//!
//! Example: a 5K run in `0:25:30` becomes a point at 5.1 min/km with hover
//! text `pace: 5m06s/km (8m12s/mi)`.

use super::pace::Pace;
use crate::parser::chip_time::parse_chip_time;
use crate::parser::schema::{Dataset, Race};
use crate::utils::error::ParseError;
use crate::utils::markup::{escape_html, link};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One plotted race
///
/// **Public** - consumed by the chart builder and the JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacePoint {
    /// Race name as given in the dataset
    pub name: String,

    pub date: NaiveDate,

    /// Chip time in seconds
    pub elapsed_seconds: u32,

    pub pace: Pace,

    /// Text drawn next to the marker (may contain links)
    pub label: String,

    /// Text shown on hover
    pub hover: String,
}

/// All races of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSeries {
    pub category: String,
    pub distance_km: f64,
    pub points: Vec<PacePoint>,
}

impl RaceSeries {
    pub fn new(category: impl Into<String>, distance_km: f64) -> Self {
        Self {
            category: category.into(),
            distance_km,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of the pace transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    /// One series per category, in `distances` order
    pub series: Vec<RaceSeries>,

    /// Names of races left out because their category is unknown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl SeriesSet {
    /// Number of plotted races across all series
    pub fn total_points(&self) -> usize {
        self.series.iter().map(RaceSeries::len).sum()
    }

    /// True when there is nothing to plot
    pub fn is_empty(&self) -> bool {
        self.total_points() == 0
    }

    pub fn get(&self, category: &str) -> Option<&RaceSeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Build chart series from a dataset
///
/// **Public** - main entry point for the pace transform
///
/// Races with a category missing from `distances` are left out of every
/// series and listed in `SeriesSet::skipped`; their chip times are never
/// parsed.
///
/// # Errors
/// * `ParseError::InvalidChipTime` - a plotted race has a malformed chip time
pub fn build_series(dataset: &Dataset) -> Result<SeriesSet, ParseError> {
    debug!(
        "Building series for {} categories from {} races",
        dataset.categories.len(),
        dataset.races.len()
    );

    let mut series: Vec<RaceSeries> = dataset
        .categories
        .iter()
        .map(|c| RaceSeries::new(c.name.clone(), c.distance_km))
        .collect();

    let index: HashMap<&str, usize> = dataset
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.as_str(), i))
        .collect();

    let mut skipped = Vec::new();

    for race in &dataset.races {
        let Some(&slot) = index.get(race.category.as_str()) else {
            debug!(
                "Skipping race '{}': unknown category '{}'",
                race.name, race.category
            );
            skipped.push(race.name.clone());
            continue;
        };

        let target = &mut series[slot];
        let point = build_point(race, target.distance_km)?;
        target.points.push(point);
    }

    Ok(SeriesSet { series, skipped })
}

/// Compute pace and labels for a single race
pub fn build_point(race: &Race, distance_km: f64) -> Result<PacePoint, ParseError> {
    let elapsed_seconds = parse_chip_time(&race.chip_time)?;
    let pace = Pace::from_elapsed(elapsed_seconds, distance_km);

    Ok(PacePoint {
        name: race.name.clone(),
        date: race.date,
        elapsed_seconds,
        pace,
        label: display_label(race),
        hover: hover_label(race, &pace),
    })
}

/// Marker text: the race name, linked to its result page and tracking page
/// when those are known
pub fn display_label(race: &Race) -> String {
    let name = escape_html(&race.name);

    let mut label = match &race.url {
        Some(url) => link(url, &name),
        None => name,
    };

    if let Some(strava) = &race.strava {
        label.push(' ');
        label.push_str(&link(strava, "(strava)"));
    }

    label
}

/// Hover text: name, date, chip time, pace in both units and placing
pub fn hover_label(race: &Race, pace: &Pace) -> String {
    format!(
        "{}<br>{}<br>time: {}<br>pace: {}/km ({}/mi)<br>position: {}/{}",
        escape_html(&race.name),
        race.date.format("%Y-%m-%d"),
        escape_html(&race.chip_time),
        pace.format_km(),
        pace.format_mile(),
        race.position,
        race.participants
    )
}
