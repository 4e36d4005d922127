//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the dataset or deriving paces from it
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid chip time '{0}': expected H:MM:SS")]
    InvalidChipTime(String),

    #[error("Invalid distance for category '{category}': {distance} km")]
    InvalidDistance { category: String, distance: f64 },

    #[error("Invalid race '{name}': {reason}")]
    InvalidRace { name: String, reason: String },
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize figure: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to read plotly.js bundle: {0}")]
    PlotlyReadFailed(#[source] std::io::Error),
}

/// Errors that can occur while loading a chart configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    TomlParseFailed(#[from] toml::de::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
