//! Table file -> infographic file.

use super::grid::build_heatmap;
use crate::output::{factor_from_stem, infographic_path, write_heatmap_png};
use crate::table::read_table;
use crate::utils::config::AnalyzerConfig;
use crate::utils::error::RenderError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Render a persisted estimate table as a PNG heat-map
///
/// **Public** - main entry point for the visualize command
///
/// # Arguments
/// * `csv_path` - Table to draw (read-only)
/// * `output_dir` - Where to put the image; the CSV's directory when None
/// * `title_prefix` - Caption; the speedup factor is appended when the file name carries one
/// * `config` - Length-column name and heat-map settings
///
/// # Returns
/// Path of the written image, `{csv stem}_infographic.png`
pub fn render_infographic(
    csv_path: impl AsRef<Path>,
    output_dir: Option<&Path>,
    title_prefix: &str,
    config: &AnalyzerConfig,
) -> Result<PathBuf, RenderError> {
    let csv_path = csv_path.as_ref();

    let table = read_table(csv_path, &config.length_column)?;
    let heatmap = build_heatmap(&table, &config.heatmap)?;
    debug!(
        "Built {}x{} heat-map (flat: {})",
        heatmap.row_count(),
        heatmap.column_count(),
        heatmap.flat
    );

    let title = infographic_title(title_prefix, csv_path);
    let image_path = infographic_path(csv_path, output_dir);

    write_heatmap_png(&heatmap, &title, &config.heatmap, &image_path)?;

    info!("✓ Infographic saved: {}", image_path.display());
    Ok(image_path)
}

/// `"{prefix} (Optimised ×{factor})"`, or just the prefix if the file name has no factor
pub fn infographic_title(prefix: &str, csv_path: &Path) -> String {
    let factor = csv_path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(factor_from_stem);

    match factor {
        Some(f) => format!("{} (Optimised ×{})", prefix, f),
        None => prefix.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_factor() {
        assert_eq!(
            infographic_title("Quantum", Path::new("out/100_5_output.csv")),
            "Quantum (Optimised ×100.5)"
        );
        assert_eq!(
            infographic_title("Quantum", Path::new("out/500_output.csv")),
            "Quantum (Optimised ×500)"
        );
    }

    #[test]
    fn test_title_without_factor() {
        assert_eq!(
            infographic_title("Quantum", Path::new("data/input/input.csv")),
            "Quantum"
        );
    }
}
