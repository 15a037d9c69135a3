//! PNG heat-map writer.
//!
//! Cells and the colour bar are plain rectangles. Text (title, axis labels,
//! cell annotations) goes on a second pass: if the host has no usable
//! fonts that pass is skipped with a warning and the image is still written.

use super::{calculate_file_size, finalize, stage_beside};
use crate::duration::format_duration;
use crate::heatmap::palette::{heat_color, text_color};
use crate::heatmap::{Heatmap, HeatmapConfig};
use crate::utils::error::RenderError;
use log::{debug, info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

const COLORBAR_STEPS: i32 = 64;

/// Pixel geometry shared by both drawing passes
#[derive(Debug, Clone, Copy)]
struct Layout {
    width: i32,
    height: i32,
    grid_left: i32,
    grid_top: i32,
    grid_right: i32,
    grid_bottom: i32,
    rows: usize,
    columns: usize,
    bar_left: i32,
    bar_right: i32,
}

impl Layout {
    fn new((width, height): (u32, u32), rows: usize, columns: usize) -> Self {
        let w = width as f64;
        let h = height as f64;
        let grid_right = (w * 0.84) as i32;

        Self {
            width: width as i32,
            height: height as i32,
            grid_left: (w * 0.10) as i32,
            grid_top: (h * 0.12) as i32,
            grid_right,
            grid_bottom: (h * 0.80) as i32,
            rows,
            columns,
            bar_left: grid_right + (w * 0.03) as i32,
            bar_right: grid_right + (w * 0.05) as i32,
        }
    }

    fn cell_width(&self) -> f64 {
        (self.grid_right - self.grid_left) as f64 / self.columns as f64
    }

    fn cell_height(&self) -> f64 {
        (self.grid_bottom - self.grid_top) as f64 / self.rows as f64
    }

    /// Upper-left and lower-right corners of a cell
    fn cell_rect(&self, row: usize, col: usize) -> ((i32, i32), (i32, i32)) {
        let x0 = self.grid_left + (col as f64 * self.cell_width()).round() as i32;
        let x1 = self.grid_left + ((col + 1) as f64 * self.cell_width()).round() as i32;
        let y0 = self.grid_top + (row as f64 * self.cell_height()).round() as i32;
        let y1 = self.grid_top + ((row + 1) as f64 * self.cell_height()).round() as i32;
        ((x0, y0), (x1, y1))
    }

    fn cell_center(&self, row: usize, col: usize) -> (i32, i32) {
        let ((x0, y0), (x1, y1)) = self.cell_rect(row, col);
        ((x0 + x1) / 2, (y0 + y1) / 2)
    }

    /// Font size in pixels relative to image height
    fn font(&self, fraction: f64) -> f64 {
        (self.height as f64 * fraction).max(8.0)
    }
}

/// Draw a heat-map and write it as a PNG
///
/// **Public** - main entry point for image output
///
/// # Arguments
/// * `heatmap` - Normalised cells from `build_heatmap`
/// * `title` - Caption drawn above the grid
/// * `config` - Size, resolution and font settings
/// * `output_path` - Destination `.png` file (overwritten if present)
///
/// # Errors
/// * `RenderError::EmptyTable` - nothing to draw
/// * `RenderError::Drawing` - the bitmap backend failed
/// * `RenderError::Output` - the destination path is unusable
pub fn write_heatmap_png(
    heatmap: &Heatmap,
    title: &str,
    config: &HeatmapConfig,
    output_path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let output_path = output_path.as_ref();

    if heatmap.row_count() == 0 || heatmap.column_count() == 0 {
        return Err(RenderError::EmptyTable {
            rows: heatmap.row_count(),
            columns: heatmap.column_count(),
        });
    }

    config.validate().map_err(RenderError::Drawing)?;

    info!("Writing heat-map to: {}", output_path.display());

    let staged = stage_beside(output_path, ".png")?;
    draw_heatmap(heatmap, title, config, staged.path())?;
    finalize(staged, output_path)?;

    info!(
        "Heat-map written successfully ({:.2} KB)",
        calculate_file_size(output_path) as f64 / 1024.0
    );

    Ok(())
}

fn draw_heatmap(
    heatmap: &Heatmap,
    title: &str,
    config: &HeatmapConfig,
    path: &Path,
) -> Result<(), RenderError> {
    let size = config.pixel_size();
    debug!("Heat-map canvas {}x{} px", size.0, size.1);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    paint(&root, heatmap, title, config, size)?;
    root.present().map_err(drawing_error)?;
    Ok(())
}

/// Cells, colour bar, then the optional text pass
fn paint<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    heatmap: &Heatmap,
    title: &str,
    config: &HeatmapConfig,
    size: (u32, u32),
) -> Result<(), RenderError> {
    let layout = Layout::new(size, heatmap.row_count(), heatmap.column_count());

    root.fill(&WHITE).map_err(drawing_error)?;

    for (r, row) in heatmap.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (upper_left, lower_right) = layout.cell_rect(r, c);
            root.draw(&Rectangle::new(
                [upper_left, lower_right],
                heat_color(cell.level).filled(),
            ))
            .map_err(drawing_error)?;
        }
    }

    draw_colorbar(root, &layout, heatmap.flat)?;

    if config.annotate {
        let labels = panic::catch_unwind(AssertUnwindSafe(|| {
            draw_labels(root, heatmap, title, &layout, &config.font_family)
        }));
        match labels {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Skipping heat-map text: {}", e),
            Err(_) => warn!("Skipping heat-map text: font backend panicked"),
        }
    }

    Ok(())
}

/// Vertical gradient, slow (1.0) at the top
fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &Layout,
    flat: bool,
) -> Result<(), RenderError> {
    let span = (layout.grid_bottom - layout.grid_top) as f64;

    for i in 0..COLORBAR_STEPS {
        let y0 = layout.grid_top + (span * i as f64 / COLORBAR_STEPS as f64).round() as i32;
        let y1 = layout.grid_top + (span * (i + 1) as f64 / COLORBAR_STEPS as f64).round() as i32;
        let level = if flat {
            0.5
        } else {
            1.0 - (i as f64 + 0.5) / COLORBAR_STEPS as f64
        };

        root.draw(&Rectangle::new(
            [(layout.bar_left, y0), (layout.bar_right, y1)],
            heat_color(level).filled(),
        ))
        .map_err(drawing_error)?;
    }

    root.draw(&Rectangle::new(
        [
            (layout.bar_left, layout.grid_top),
            (layout.bar_right, layout.grid_bottom),
        ],
        BLACK.stroke_width(1),
    ))
    .map_err(drawing_error)?;

    Ok(())
}

fn draw_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    heatmap: &Heatmap,
    title: &str,
    layout: &Layout,
    family: &str,
) -> Result<(), RenderError> {
    let style = |size: f64, color: &RGBColor, h: HPos, v: VPos| {
        (family, size).into_font().color(color).pos(Pos::new(h, v))
    };
    let text = |s: &str, at: (i32, i32), st: TextStyle| {
        root.draw(&Text::new(s.to_string(), at, st)).map_err(drawing_error)
    };

    text(
        title,
        (layout.width / 2, layout.grid_top / 3),
        style(layout.font(0.035), &BLACK, HPos::Center, VPos::Center),
    )?;

    // Row axis
    text(
        "Password length",
        (layout.grid_left / 2, layout.grid_top - 6),
        style(layout.font(0.022), &BLACK, HPos::Center, VPos::Bottom),
    )?;
    for (r, label) in heatmap.row_labels.iter().enumerate() {
        let (_, cy) = layout.cell_center(r, 0);
        text(
            label,
            (layout.grid_left - 10, cy),
            style(layout.font(0.02), &BLACK, HPos::Right, VPos::Center),
        )?;
    }

    // Column axis; long category names wrap onto several lines
    let tick_size = layout.font(0.018);
    let max_chars = ((layout.cell_width() / (tick_size * 0.55)) as usize).max(6);
    for (c, label) in heatmap.column_labels.iter().enumerate() {
        let (cx, _) = layout.cell_center(0, c);
        for (i, line) in wrap_words(label, max_chars).iter().enumerate() {
            let y = layout.grid_bottom + 8 + (i as f64 * tick_size * 1.2) as i32;
            text(line, (cx, y), style(tick_size, &BLACK, HPos::Center, VPos::Top))?;
        }
    }
    text(
        "Complexity category",
        ((layout.grid_left + layout.grid_right) / 2, layout.height - layout.height / 30),
        style(layout.font(0.022), &BLACK, HPos::Center, VPos::Bottom),
    )?;

    // Cell annotations
    let cell_size = layout.font(0.018);
    for (r, row) in heatmap.cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let ink = text_color(heat_color(cell.level));
            text(
                &cell.label,
                layout.cell_center(r, c),
                style(cell_size, &ink, HPos::Center, VPos::Center),
            )?;
        }
    }

    // Colour bar captions
    let bar_mid = (layout.bar_left + layout.bar_right) / 2;
    text(
        "Seconds (log scale)",
        (bar_mid, layout.grid_top - 6),
        style(layout.font(0.018), &BLACK, HPos::Center, VPos::Bottom),
    )?;
    text(
        &format_duration(heatmap.max_seconds),
        (layout.bar_right + 6, layout.grid_top),
        style(layout.font(0.016), &BLACK, HPos::Left, VPos::Top),
    )?;
    text(
        &format_duration(heatmap.min_seconds),
        (layout.bar_right + 6, layout.grid_bottom),
        style(layout.font(0.016), &BLACK, HPos::Left, VPos::Bottom),
    )?;

    Ok(())
}

/// Greedy word wrap; a single word longer than `width` gets its own line
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn drawing_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}
