//! Deterministic output file names.
//!
//! A transform with factor 100.5 writes `100_5_output.csv`; rendering that
//! table writes `100_5_output_infographic.png`. Re-running either step
//! overwrites the previous artifact instead of accumulating copies.

use crate::utils::config::{IMAGE_EXTENSION, INFOGRAPHIC_SUFFIX, OUTPUT_SUFFIX, TABLE_EXTENSION};
use std::path::{Path, PathBuf};

/// Render a factor for use in a file name: `100`, `100_5`, `0_25`
pub fn factor_str(factor: f64) -> String {
    if factor.fract() == 0.0 && factor.abs() < 1e15 {
        format!("{}", factor as i64)
    } else {
        format!("{}", factor).replace('.', "_")
    }
}

/// `{dir}/{factor}_output.csv`
pub fn transformed_table_path(output_dir: &Path, factor: f64) -> PathBuf {
    output_dir.join(format!(
        "{}{}.{}",
        factor_str(factor),
        OUTPUT_SUFFIX,
        TABLE_EXTENSION
    ))
}

/// `{dir}/{csv stem}_infographic.png`, next to the CSV when `output_dir` is None
pub fn infographic_path(csv_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => csv_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    dir.join(format!("{}{}.{}", stem, INFOGRAPHIC_SUFFIX, IMAGE_EXTENSION))
}

/// Recover the speedup factor from a file stem such as `100_5_output`
///
/// Accepts `<digits>_...`, `<digits>_<digits>_...` and `<digits>.<digits>_...`.
pub fn factor_from_stem(stem: &str) -> Option<f64> {
    let whole_len = stem.find(|c: char| !c.is_ascii_digit()).unwrap_or(stem.len());
    if whole_len == 0 {
        return None;
    }
    let (whole, rest) = stem.split_at(whole_len);

    // "<whole>[._]<frac>_"
    if let Some(after_sep) = rest.strip_prefix('_').or_else(|| rest.strip_prefix('.')) {
        let frac_len = after_sep
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_sep.len());
        if frac_len > 0 && after_sep[frac_len..].starts_with('_') {
            return format!("{}.{}", whole, &after_sep[..frac_len]).parse().ok();
        }
    }

    // "<whole>_"
    if rest.starts_with('_') {
        return whole.parse().ok();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_str() {
        assert_eq!(factor_str(100.0), "100");
        assert_eq!(factor_str(100.5), "100_5");
        assert_eq!(factor_str(0.25), "0_25");
        assert_eq!(factor_str(1_000_000.0), "1000000");
    }

    #[test]
    fn test_transformed_table_path() {
        assert_eq!(
            transformed_table_path(Path::new("out"), 500.0),
            PathBuf::from("out/500_output.csv")
        );
    }

    #[test]
    fn test_infographic_path() {
        let csv = Path::new("data/output/100_output.csv");
        assert_eq!(
            infographic_path(csv, None),
            PathBuf::from("data/output/100_output_infographic.png")
        );
        assert_eq!(
            infographic_path(csv, Some(Path::new("img"))),
            PathBuf::from("img/100_output_infographic.png")
        );
    }

    #[test]
    fn test_factor_from_stem() {
        assert_eq!(factor_from_stem("100_output"), Some(100.0));
        assert_eq!(factor_from_stem("100_5_output"), Some(100.5));
        assert_eq!(factor_from_stem("0_25_output"), Some(0.25));
        assert_eq!(factor_from_stem("2.5_output"), Some(2.5));
        assert_eq!(factor_from_stem("100_5output"), Some(100.0));
        assert_eq!(factor_from_stem("input"), None);
        assert_eq!(factor_from_stem("100"), None);
    }

    #[test]
    fn test_factor_round_trips_through_name() {
        for factor in [1.0, 100.0, 100.5, 0.25, 12345.75] {
            let stem = format!("{}{}", factor_str(factor), OUTPUT_SUFFIX);
            assert_eq!(factor_from_stem(&stem), Some(factor));
        }
    }
}
