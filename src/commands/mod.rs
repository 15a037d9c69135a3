//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod list;
pub mod models;
pub mod pipeline;
pub mod transform;
pub mod utils;
pub mod visualize;

// Re-export main command functions
pub use list::{entries_to_json, list_tables, select_table, TableEntry};
pub use models::{PipelineArgs, PipelineOutput, TransformArgs, VisualizeArgs};
pub use pipeline::execute_pipeline;
pub use transform::{execute_transform, validate_args};
pub use visualize::execute_visualize;
