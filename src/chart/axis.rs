//! Pace axis ticks.

use crate::aggregator::pace::format_min_sec;

/// Tick positions (minutes) and their `XmYYs` labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl Ticks {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ticks every `step_seconds` between `lo` and `hi` minutes, inclusive
///
/// Ticks sit on whole multiples of the step, so a 15s step over
/// 5.63..8.05 min yields 5m45s, 6m00s, ... 8m00s.
pub fn pace_ticks(lo_minutes: f64, hi_minutes: f64, step_seconds: u32) -> Ticks {
    let mut ticks = Ticks::default();
    if step_seconds == 0
        || !lo_minutes.is_finite()
        || !hi_minutes.is_finite()
        || lo_minutes > hi_minutes
    {
        return ticks;
    }

    // Tolerate float noise at the bounds (3.5 * 60 must give a 3m30s tick)
    const EPSILON: f64 = 1e-6;
    let step = u64::from(step_seconds);
    let lo = (lo_minutes * 60.0 - EPSILON).max(0.0);
    let hi = hi_minutes * 60.0 + EPSILON;

    let mut seconds = (lo / step as f64).ceil() as u64 * step;
    while (seconds as f64) <= hi {
        ticks.values.push(round_minutes(seconds as f64 / 60.0));
        ticks.labels.push(format_min_sec(seconds as f64));
        seconds += step;
    }

    ticks
}

// Four decimals keep the generated JSON readable (3.6667 rather than 3.6666666666666665)
fn round_minutes(minutes: f64) -> f64 {
    (minutes * 10_000.0).round() / 10_000.0
}
