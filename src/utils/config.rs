//! Configuration and constants for the CLI.

use crate::duration::DurationFormat;
use crate::heatmap::HeatmapConfig;
use crate::utils::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Literal used for durations too short to measure
pub const INSTANT_LITERAL: &str = "Instantly";

/// Header of the first column in every estimate table
pub const DEFAULT_LENGTH_COLUMN: &str = "Number of Characters";

// File naming: `{factor}_output.csv` -> `{factor}_output_infographic.png`
pub const OUTPUT_SUFFIX: &str = "_output";
pub const TABLE_EXTENSION: &str = "csv";
pub const INFOGRAPHIC_SUFFIX: &str = "_infographic";
pub const IMAGE_EXTENSION: &str = "png";
pub const ORIGINAL_COPY_NAME: &str = "password_bruteforce_old.csv";

pub const DEFAULT_INPUT_PATH: &str = "data/input/input.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "data/output";
pub const DEFAULT_TITLE_PREFIX: &str = "Quantum Brute-Force Durations";

pub const DEFAULT_FACTOR: f64 = 100.0;
pub const MIN_FACTOR: f64 = 1.0;
pub const MAX_FACTOR: f64 = 1_000_000.0;

/// Everything an operation needs that used to be a process-wide default.
///
/// Every field has a default, so a TOML file only needs to name what it
/// overrides:
///
/// ```toml
/// output_dir = "out"
/// default_factor = 500
///
/// [format]
/// precision = 1
///
/// [heatmap]
/// dpi = 150
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub default_factor: f64,
    pub min_factor: f64,
    pub max_factor: f64,
    pub length_column: String,
    pub title_prefix: String,
    /// Also write the untouched input next to the transformed table
    pub save_original: bool,
    pub format: DurationFormat,
    pub heatmap: HeatmapConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_factor: DEFAULT_FACTOR,
            min_factor: MIN_FACTOR,
            max_factor: MAX_FACTOR,
            length_column: DEFAULT_LENGTH_COLUMN.to_string(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            save_original: true,
            format: DurationFormat::default(),
            heatmap: HeatmapConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML config file and validate it
    ///
    /// **Public** - used by main.rs when `--config` is given
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&text)
    }

    /// Parse config from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_title_prefix(mut self, title: impl Into<String>) -> Self {
        self.title_prefix = title.into();
        self
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_factor.is_finite() && self.min_factor > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_factor must be positive, got {}",
                self.min_factor
            )));
        }

        if !self.max_factor.is_finite() || self.max_factor < self.min_factor {
            return Err(ConfigError::Invalid(format!(
                "max_factor must be finite and >= min_factor, got {}",
                self.max_factor
            )));
        }

        if !(self.min_factor..=self.max_factor).contains(&self.default_factor) {
            return Err(ConfigError::Invalid(format!(
                "default_factor {} is outside {}..={}",
                self.default_factor, self.min_factor, self.max_factor
            )));
        }

        if self.length_column.trim().is_empty() {
            return Err(ConfigError::Invalid("length_column cannot be empty".to_string()));
        }

        self.format.validate().map_err(ConfigError::Invalid)?;
        self.heatmap.validate().map_err(ConfigError::Invalid)?;

        Ok(())
    }
}
