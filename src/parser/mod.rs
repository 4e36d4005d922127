//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Deserializing the race dataset JSON
//! - Validating distances and race records
//! - Parsing chip times

pub mod chip_time;
pub mod dataset;
pub mod schema;

// Re-export main types
pub use chip_time::parse_chip_time;
pub use dataset::{load_dataset, parse_dataset, validate_dataset};
pub use schema::{Category, Dataset, Race};
