use crate::parser::load_dataset;
use crate::utils::config::SERIES_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a dataset JSON file and report what it contains
pub fn validate_dataset_file(file_path: impl AsRef<Path>) -> Result<()> {
    let file_path = file_path.as_ref();
    println!("Validating dataset: {}", file_path.display());

    let dataset = load_dataset(file_path)?;
    let unknown = dataset.unknown_category_races().count();

    println!("✓ Valid dataset JSON");
    println!("  Categories: {}", dataset.categories.len());
    for category in &dataset.categories {
        println!("    {:<20} {} km", category.name, category.distance_km);
    }
    println!("  Races: {}", dataset.races.len());
    println!("  Races with unknown category: {}", unknown);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Race Pace v{}", env!("CARGO_PKG_VERSION"));
    println!("Series Schema: v{}", SERIES_SCHEMA_VERSION);
    println!();
    println!("Interactive pace-over-time charts from race results.");
}
