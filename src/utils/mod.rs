//! Utility modules for configuration, error handling, and markup escaping.

pub mod config;
pub mod error;
pub mod markup;

// Re-export commonly used error types for convenience
pub use error::{ChartError, ConfigError, OutputError, ParseError};
