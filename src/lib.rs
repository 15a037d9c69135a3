//! Quantum Password Analyzer
//!
//! Rescales brute-force password cracking-time estimates by a quantum
//! speedup factor and renders the result as a heat-map infographic.
//!
//! This crate provides the core implementation for the `qpa` CLI tool:
//!
//! - [`duration`] - parse and format human-readable durations
//! - [`table`] / [`transform`] - read an estimate table and divide every cell by a factor
//! - [`heatmap`] - log-scaled colour grid drawn to PNG
//! - [`commands`] - the CLI operations, including the table catalog
//!
//! ## Getting Started
//!
//! ```bash
//! qpa transform --input data/input/input.csv --factor 500
//! qpa visualize --csv data/output/500_output.csv
//! ```

pub mod commands;
pub mod duration;
pub mod heatmap;
pub mod output;
pub mod table;
pub mod transform;
pub mod utils;
