//! Load and validate a race dataset from JSON.

use super::schema::Dataset;
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use std::path::Path;

/// Load a dataset from a JSON file
///
/// **Public** - main entry point for input
///
/// # Errors
/// * `ParseError::IoError` - file cannot be read
/// * `ParseError::JsonError` - not JSON, or a required field is missing or mistyped
/// * `ParseError::InvalidDistance` / `ParseError::InvalidRace` - see [`validate_dataset`]
pub fn load_dataset(input_path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let input_path = input_path.as_ref();

    info!("Loading dataset from: {}", input_path.display());

    let contents = std::fs::read_to_string(input_path)?;
    parse_dataset(&contents)
}

/// Parse and validate a dataset from a JSON string
pub fn parse_dataset(json: &str) -> Result<Dataset, ParseError> {
    let dataset: Dataset = serde_json::from_str(json)?;

    validate_dataset(&dataset)?;

    debug!(
        "Dataset loaded: {} categories, {} races",
        dataset.categories.len(),
        dataset.races.len()
    );

    Ok(dataset)
}

/// Check value ranges serde cannot express
///
/// Distances must be finite and positive. Positions and participant counts
/// must be at least 1. Races with an unknown category are not an error; they
/// are only reported here.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ParseError> {
    for category in &dataset.categories {
        if !category.distance_km.is_finite() || category.distance_km <= 0.0 {
            return Err(ParseError::InvalidDistance {
                category: category.name.clone(),
                distance: category.distance_km,
            });
        }
    }

    for race in &dataset.races {
        if race.position == 0 {
            return Err(ParseError::InvalidRace {
                name: race.name.clone(),
                reason: "position must be at least 1".to_string(),
            });
        }
        if race.participants == 0 {
            return Err(ParseError::InvalidRace {
                name: race.name.clone(),
                reason: "participants must be at least 1".to_string(),
            });
        }
        if race.position > race.participants {
            warn!(
                "Race '{}' has position {} above participant count {}",
                race.name, race.position, race.participants
            );
        }
    }

    Ok(())
}
