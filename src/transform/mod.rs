//! Speedup-factor scaling of estimate tables.

pub mod scaler;

pub use scaler::{transform_cell, transform_file, transform_table, validate_factor, TransformOutput};
