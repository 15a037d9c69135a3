//! Turn an estimate table into normalised heat-map levels.

use crate::duration::parse_duration;
use crate::table::EstimateTable;
use crate::utils::error::RenderError;
use log::{debug, warn};
use serde::Deserialize;

/// Heat-map rendering configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatmapConfig {
    /// Figure width in inches
    pub width: f64,

    /// Figure height in inches
    pub height: f64,

    pub dpi: u32,

    /// Floor applied before taking log10 so "Instantly" stays finite
    pub epsilon: f64,

    /// Draw the duration string inside each cell
    pub annotate: bool,

    pub font_family: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 14.0,
            height: 8.0,
            dpi: 300,
            epsilon: 0.01,
            annotate: true,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl HeatmapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Output image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpi as f64).round() as u32,
            (self.height * self.dpi as f64).round() as u32,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(format!(
                "figure size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.dpi == 0 {
            return Err("dpi must be greater than 0".to_string());
        }
        let (w, h) = self.pixel_size();
        if w < 64 || h < 64 || w > 20_000 || h > 20_000 {
            return Err(format!("image size {}x{} px is out of range", w, h));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(format!("epsilon must be positive, got {}", self.epsilon));
        }
        Ok(())
    }
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    /// Original duration string, drawn as the annotation
    pub label: String,
    pub seconds: f64,
    /// log10 of the (floored) seconds
    pub intensity: f64,
    /// Intensity normalised across the table to [0, 1]
    pub level: f64,
}

/// Everything the drawing stage needs, independent of any backend
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<HeatCell>>,
    pub min_seconds: f64,
    pub max_seconds: f64,
    /// Every cell had the same intensity; levels were pinned to 0.5
    pub flat: bool,
}

impl Heatmap {
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }
}

/// Parse every cell and normalise its log-scaled duration
///
/// **Public** - main entry point before drawing
///
/// # Errors
/// * `RenderError::EmptyTable` - no data rows or no category columns
/// * `RenderError::Cell` - a cell is not a duration string
pub fn build_heatmap(table: &EstimateTable, config: &HeatmapConfig) -> Result<Heatmap, RenderError> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable {
            rows: table.row_count(),
            columns: table.column_count(),
        });
    }

    let mut cells = Vec::with_capacity(table.row_count());
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut min_seconds = f64::INFINITY;
    let mut max_seconds = f64::NEG_INFINITY;

    for (idx, row) in table.rows.iter().enumerate() {
        let mut out = Vec::with_capacity(row.cells.len());

        for (col, text) in row.cells.iter().enumerate() {
            let seconds = parse_duration(text).map_err(|source| RenderError::Cell {
                row: idx + 1,
                length: row.length,
                column: table.categories[col].clone(),
                source,
            })?;
            let intensity = seconds.max(config.epsilon).log10();

            lo = lo.min(intensity);
            hi = hi.max(intensity);
            min_seconds = min_seconds.min(seconds);
            max_seconds = max_seconds.max(seconds);

            out.push(HeatCell {
                label: text.clone(),
                seconds,
                intensity,
                level: 0.0,
            });
        }

        cells.push(out);
    }

    let range = hi - lo;
    let flat = !(range > f64::EPSILON);
    if flat {
        warn!("All cells have the same duration; using a flat colour");
    }

    for cell in cells.iter_mut().flatten() {
        cell.level = if flat { 0.5 } else { (cell.intensity - lo) / range };
    }

    debug!(
        "Heat-map intensities span 10^{:.2}..10^{:.2} seconds",
        lo, hi
    );

    Ok(Heatmap {
        row_labels: table.rows.iter().map(|r| r.length.to_string()).collect(),
        column_labels: table.categories.clone(),
        cells,
        min_seconds,
        max_seconds,
        flat,
    })
}
