//! Output writers for transformed tables and infographics.
//!
//! This module handles writing data to disk:
//! - CSV estimate tables
//! - PNG heat-maps
//! - Deterministic output file names
//!
//! Every writer stages into a temp file next to the destination and renames
//! it into place, so a failed write never leaves a partial artifact behind.

pub mod naming;
pub mod png;
pub mod table;

// Re-export main functions
pub use naming::{factor_from_stem, factor_str, infographic_path, transformed_table_path};
pub use png::write_heatmap_png;
pub use table::{write_table, write_tables};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;
use tempfile::NamedTempFile;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create a temp file in the destination's directory
///
/// **Private** - shared by the CSV and PNG writers
///
/// The temp file lives on the same filesystem as `path`, so the final
/// rename is atomic. `suffix` keeps the extension backends sniff on.
fn stage_beside(path: &Path, suffix: &str) -> Result<NamedTempFile, OutputError> {
    validate_path(path)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    let staged = tempfile::Builder::new()
        .prefix(".qpa-")
        .suffix(suffix)
        .tempfile_in(parent)?;

    Ok(staged)
}

/// Move a staged temp file onto its final path
fn finalize(staged: NamedTempFile, path: &Path) -> Result<(), OutputError> {
    staged.persist(path).map_err(|e| OutputError::WriteFailed(e.error))?;
    Ok(())
}

/// File size in bytes, 0 if unreadable
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
