//! Visualize command implementation.

use super::models::VisualizeArgs;
use crate::heatmap::render_infographic;
use crate::utils::config::AnalyzerConfig;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the visualize command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written `{csv stem}_infographic.png`
pub fn execute_visualize(args: &VisualizeArgs, config: &AnalyzerConfig) -> Result<PathBuf> {
    let start_time = Instant::now();

    info!("Rendering heat-map for: {}", args.csv.display());

    let image_path = render_infographic(
        &args.csv,
        args.output_dir.as_deref(),
        &args.title_prefix,
        config,
    )
    .with_context(|| format!("Failed to render {}", args.csv.display()))?;

    info!(
        "Visualize completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(image_path)
}
