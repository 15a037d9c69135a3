//! Pipeline command: transform, then render the transformed table.

use super::models::{PipelineArgs, PipelineOutput, VisualizeArgs};
use super::transform::execute_transform;
use super::visualize::execute_visualize;
use crate::utils::config::AnalyzerConfig;
use anyhow::Result;
use log::info;

/// Execute the full pipeline
///
/// **Public** - main entry point called from main.rs
///
/// The infographic lands in the same directory as the transformed table.
pub fn execute_pipeline(args: &PipelineArgs, config: &AnalyzerConfig) -> Result<PipelineOutput> {
    info!("Pipeline step 1/2: transform");
    let transformed = execute_transform(&args.transform, config)?;

    info!("Pipeline step 2/2: visualize");
    let visualize = VisualizeArgs {
        csv: transformed.table_path.clone(),
        output_dir: Some(args.transform.output_dir.clone()),
        title_prefix: args.title_prefix.clone(),
    };
    let image_path = execute_visualize(&visualize, config)?;

    Ok(PipelineOutput {
        table_path: transformed.table_path,
        image_path,
    })
}
