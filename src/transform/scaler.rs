//! Divide every duration in a table by a speedup factor.

use crate::duration::{parse_duration, DurationFormat};
use crate::output::{transformed_table_path, write_table, write_tables};
use crate::table::{read_table, EstimateTable};
use crate::utils::config::{AnalyzerConfig, ORIGINAL_COPY_NAME};
use crate::utils::error::{ParseError, TransformError};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Files produced by [`transform_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// `{factor}_output.csv`
    pub table_path: PathBuf,

    /// Untouched copy of the input, when requested
    pub original_path: Option<PathBuf>,
}

/// Reject factors that cannot divide a duration meaningfully
pub fn validate_factor(factor: f64) -> Result<(), TransformError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(TransformError::InvalidFactor(factor))
    }
}

/// Scale one duration string: parse, divide, format
///
/// The factor is assumed valid; see [`validate_factor`].
pub fn transform_cell(text: &str, factor: f64, format: &DurationFormat) -> Result<String, ParseError> {
    let seconds = parse_duration(text)?;
    Ok(format.format(seconds / factor))
}

/// Scale every data cell of a table
///
/// **Public** - in-memory core of the transform command
///
/// # Errors
/// * `TransformError::InvalidFactor` - factor is zero, negative, NaN or infinite
/// * `TransformError::Cell` - first cell that is not a duration string
/// * `TransformError::Overflow` - a scaled value is not finite
pub fn transform_table(
    table: &EstimateTable,
    factor: f64,
    format: &DurationFormat,
) -> Result<EstimateTable, TransformError> {
    validate_factor(factor)?;

    table.map_cells(|row, estimate, col, text| {
        let column = || table.categories[col].clone();

        let seconds = parse_duration(text).map_err(|source| TransformError::Cell {
            row,
            length: estimate.length,
            column: column(),
            source,
        })?;

        let scaled = seconds / factor;
        if !scaled.is_finite() {
            return Err(TransformError::Overflow {
                row,
                length: estimate.length,
                column: column(),
            });
        }

        Ok(format.format(scaled))
    })
}

/// Read a table, scale it, and write `{factor}_output.csv`
///
/// **Public** - main entry point for the transform command
///
/// # Arguments
/// * `input_path` - Original estimate table
/// * `output_dir` - Directory for the output table (created if missing)
/// * `factor` - Speedup factor; every duration is divided by it
/// * `config` - Length-column name, formatting rules, `save_original`
///
/// # Returns
/// Paths of the written files. Nothing is written unless every cell scaled
/// and every output file could be written.
pub fn transform_file(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    factor: f64,
    config: &AnalyzerConfig,
) -> Result<TransformOutput, TransformError> {
    let input_path = input_path.as_ref();
    let output_dir = output_dir.as_ref();

    validate_factor(factor)?;

    let original = read_table(input_path, &config.length_column)?;
    debug!(
        "Scaling {} rows x {} categories by {}",
        original.row_count(),
        original.column_count(),
        factor
    );

    let scaled = transform_table(&original, factor, &config.format)?;

    let table_path = transformed_table_path(output_dir, factor);
    let original_path = config
        .save_original
        .then(|| output_dir.join(ORIGINAL_COPY_NAME));

    match &original_path {
        Some(copy) => write_tables(&[(&scaled, table_path.as_path()), (&original, copy.as_path())])?,
        None => write_table(&scaled, &table_path)?,
    }
    info!("✓ Speed-up factor applied: {}×", factor);

    Ok(TransformOutput {
        table_path,
        original_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::read_table_from;

    fn sample() -> EstimateTable {
        read_table_from(
            "Number of Characters,Numbers Only,Lowercase Letters\n4,Instantly,1 second\n6,1 week,1 year\n".as_bytes(),
            "Number of Characters",
        )
        .unwrap()
    }

    #[test]
    fn test_validate_factor() {
        assert!(validate_factor(1.0).is_ok());
        assert!(validate_factor(0.5).is_ok());
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_factor(bad),
                Err(TransformError::InvalidFactor(_))
            ));
        }
    }

    #[test]
    fn test_transform_cell_week_by_500() {
        let out = transform_cell("1 week", 500.0, &DurationFormat::default()).unwrap();
        assert_eq!(out, "20.16 minutes");
    }

    #[test]
    fn test_transform_table() {
        let scaled = transform_table(&sample(), 100.0, &DurationFormat::default()).unwrap();

        assert_eq!(scaled.categories, sample().categories);
        assert_eq!(scaled.rows[0].cells, vec!["Instantly", "Instantly"]);
        assert_eq!(scaled.rows[1].cells, vec!["1.68 hours", "3.65 days"]);
    }

    #[test]
    fn test_factor_one_keeps_canonical_cells() {
        let scaled = transform_table(&sample(), 1.0, &DurationFormat::default()).unwrap();
        assert_eq!(scaled, sample());
    }

    #[test]
    fn test_invalid_factor_checked_first() {
        let mut table = sample();
        table.rows[0].cells[0] = "banana".to_string();

        let result = transform_table(&table, 0.0, &DurationFormat::default());
        assert!(matches!(result, Err(TransformError::InvalidFactor(_))));
    }

    #[test]
    fn test_bad_cell_reports_location() {
        let mut table = sample();
        table.rows[1].cells[1] = "banana".to_string();

        let err = transform_table(&table, 10.0, &DurationFormat::default()).unwrap_err();
        match err {
            TransformError::Cell { row, length, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(length, 6);
                assert_eq!(column, "Lowercase Letters");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tiny_factor_overflows() {
        let table = read_table_from(
            "Number of Characters,A\n4,1qn years\n".as_bytes(),
            "Number of Characters",
        )
        .unwrap();

        let result = transform_table(&table, 1e-300, &DurationFormat::default());
        assert!(matches!(result, Err(TransformError::Overflow { .. })));
    }
}
