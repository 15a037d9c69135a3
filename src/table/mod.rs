//! Estimate tables: the in-memory model and the CSV reader.

pub mod reader;
pub mod schema;

// Re-export main types
pub use reader::{read_table, read_table_from};
pub use schema::{EstimateRow, EstimateTable};
