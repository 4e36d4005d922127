//! Terminal summary of per-category statistics.

use crate::aggregator::metrics::CategoryStats;
use colored::*;

/// Create a table of per-category statistics for printing
pub fn generate_text_summary(stats: &[CategoryStats]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("\n  {}", "RACE PACE SUMMARY".bold()));
    lines.push(format!(
        "  {:<20} {:>6} {:>10} {:>10} {:>12}  {}",
        "Category", "Races", "Best/km", "Mean/km", "Latest", "Best race"
    ));
    lines.push(format!("  {}", "-".repeat(78)));

    for s in stats {
        let (best, best_race) = match &s.best {
            Some((pace, name)) => (pace.format_km(), name.as_str()),
            None => ("-".to_string(), "-"),
        };
        let mean = s
            .mean
            .map(|p| p.format_km())
            .unwrap_or_else(|| "-".to_string());
        let latest = s
            .latest
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        lines.push(format!(
            "  {:<20} {:>6} {:>10} {:>10} {:>12}  {}",
            truncate(&s.category, 20).cyan(),
            s.race_count,
            best.green(),
            mean,
            latest,
            best_race
        ));
    }

    let total: usize = stats.iter().map(|s| s.race_count).sum();
    lines.push(format!("  {}", "-".repeat(78)));
    lines.push(format!("  {} races plotted", total));

    lines.join("\n")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
