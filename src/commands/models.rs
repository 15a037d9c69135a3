use crate::utils::config::AnalyzerConfig;
use std::path::PathBuf;

/// Arguments for the transform command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct TransformArgs {
    /// Original estimate table
    pub input: PathBuf,

    /// Directory for `{factor}_output.csv`
    pub output_dir: PathBuf,

    /// Speedup factor every duration is divided by
    pub factor: f64,

    /// Also write `password_bruteforce_old.csv`
    pub save_original: bool,
}

impl TransformArgs {
    /// Defaults taken from the config rather than hard-coded
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            input: config.input_path.clone(),
            output_dir: config.output_dir.clone(),
            factor: config.default_factor,
            save_original: config.save_original,
        }
    }
}

impl Default for TransformArgs {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

/// Arguments for the visualize command
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizeArgs {
    /// Table to draw
    pub csv: PathBuf,

    /// Image directory; next to the CSV when None
    pub output_dir: Option<PathBuf>,

    pub title_prefix: String,
}

/// Arguments for the pipeline command (transform, then visualize the result)
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineArgs {
    pub transform: TransformArgs,
    pub title_prefix: String,
}

/// Files produced by the pipeline command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub table_path: PathBuf,
    pub image_path: PathBuf,
}
