//! Pace arithmetic and `XmYYs` formatting.

use crate::utils::config::KM_PER_MILE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time per unit distance, stored as seconds per kilometer
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pace {
    seconds_per_km: f64,
}

impl Pace {
    /// Pace for `elapsed_seconds` over `distance_km`
    ///
    /// The caller guarantees a positive distance; the dataset loader rejects
    /// anything else.
    pub fn from_elapsed(elapsed_seconds: u32, distance_km: f64) -> Self {
        Self {
            seconds_per_km: f64::from(elapsed_seconds) / distance_km,
        }
    }

    pub fn from_seconds_per_km(seconds_per_km: f64) -> Self {
        Self { seconds_per_km }
    }

    pub fn seconds_per_km(&self) -> f64 {
        self.seconds_per_km
    }

    pub fn seconds_per_mile(&self) -> f64 {
        self.seconds_per_km * KM_PER_MILE
    }

    /// Minutes per kilometer, the unit of the primary chart axis
    pub fn minutes_per_km(&self) -> f64 {
        self.seconds_per_km / 60.0
    }

    pub fn minutes_per_mile(&self) -> f64 {
        self.seconds_per_mile() / 60.0
    }

    pub fn format_km(&self) -> String {
        format_min_sec(self.seconds_per_km())
    }

    pub fn format_mile(&self) -> String {
        format_min_sec(self.seconds_per_mile())
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/km ({}/mi)", self.format_km(), self.format_mile())
    }
}

/// Render a duration as `{minutes}m{seconds:02}s`
///
/// The duration is rounded to the nearest whole second first, so 59.6s
/// becomes `1m00s` rather than `0m60s`.
pub fn format_min_sec(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0).round() as u64;
    format!("{}m{:02}s", total / 60, total % 60)
}
