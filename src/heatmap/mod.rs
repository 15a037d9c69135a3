//! Heat-map infographics of cracking-time tables.
//!
//! Cells are coloured by log10 of their duration, normalised across the
//! whole table, and annotated with the original duration strings.

pub mod grid;
pub mod palette;
pub mod renderer;

// Re-export main types
pub use grid::{build_heatmap, HeatCell, Heatmap, HeatmapConfig};
pub use renderer::{infographic_title, render_infographic};
