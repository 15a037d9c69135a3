//! Transform command implementation.
//!
//! The transform command:
//! 1. Validates the speedup factor
//! 2. Reads and scales the input table
//! 3. Writes `{factor}_output.csv` (and the original copy, if requested)

use super::models::TransformArgs;
use crate::transform::{transform_file, TransformOutput};
use crate::utils::config::AnalyzerConfig;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the transform command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid factor (checked before the input is opened)
/// * Input table missing or malformed
/// * A cell that is not a duration string (no output is written)
/// * File write errors
pub fn execute_transform(args: &TransformArgs, config: &AnalyzerConfig) -> Result<TransformOutput> {
    let start_time = Instant::now();

    info!("Starting transform of: {}", args.input.display());
    info!("Step 1/2: Scaling durations by {}×...", args.factor);

    let config = AnalyzerConfig {
        save_original: args.save_original,
        ..config.clone()
    };

    let output = transform_file(&args.input, &args.output_dir, args.factor, &config)
        .with_context(|| format!("Failed to transform {}", args.input.display()))?;

    info!("Step 2/2: Outputs written");
    if let Some(original) = &output.original_path {
        info!("✓ Wrote {}", original.display());
    }
    info!("✓ Wrote {}", output.table_path.display());

    info!(
        "Transform completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(output)
}

/// Validate transform arguments
///
/// **Public** - can be called before execute_transform for early validation
///
/// Beyond the hard rule (positive and finite), the CLI keeps factors inside
/// the configured `min_factor..=max_factor` range.
pub fn validate_args(args: &TransformArgs, config: &AnalyzerConfig) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    if !args.factor.is_finite() || args.factor <= 0.0 {
        anyhow::bail!("Speedup factor must be a positive number, got {}", args.factor);
    }

    if args.factor < config.min_factor || args.factor > config.max_factor {
        anyhow::bail!(
            "Speedup factor must be between {} and {}, got {}",
            config.min_factor,
            config.max_factor,
            args.factor
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_default() {
        let config = AnalyzerConfig::default();
        assert!(validate_args(&TransformArgs::default(), &config).is_ok());
    }

    #[test]
    fn test_validate_args_factor_below_range() {
        let config = AnalyzerConfig::default();
        let args = TransformArgs {
            factor: 0.5,
            ..Default::default()
        };
        assert!(validate_args(&args, &config).is_err());
    }

    #[test]
    fn test_validate_args_factor_above_range() {
        let config = AnalyzerConfig::default();
        let args = TransformArgs {
            factor: 2_000_000.0,
            ..Default::default()
        };
        assert!(validate_args(&args, &config).is_err());
    }

    #[test]
    fn test_validate_args_nan_factor() {
        let config = AnalyzerConfig::default();
        let args = TransformArgs {
            factor: f64::NAN,
            ..Default::default()
        };
        assert!(validate_args(&args, &config).is_err());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let config = AnalyzerConfig::default();
        let args = TransformArgs {
            input: Default::default(),
            ..Default::default()
        };
        assert!(validate_args(&args, &config).is_err());
    }
}
