//! Race Pace
//!
//! Interactive pace-over-time charts from a personal race-results dataset.
//!
//! This crate provides the core implementation for the `race-pace` CLI:
//! dataset parsing, the pace transform, chart rendering and file output.
//!
//! ## Getting Started
//!
//! ```bash
//! race-pace plot --input races.json --output races.html
//! race-pace --help
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
