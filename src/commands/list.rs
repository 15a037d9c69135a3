//! Catalog of transformed tables in an output directory.

use crate::output::factor_from_stem;
use crate::utils::config::{OUTPUT_SUFFIX, TABLE_EXTENSION};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A `*_output.csv` file available for visualization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEntry {
    /// File name, e.g. `100_output.csv`
    pub name: String,

    pub path: PathBuf,

    /// Speedup factor recovered from the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
}

/// List transformed tables, sorted by file name
///
/// **Public** - backs the list command and [`select_table`]
///
/// A missing directory is an empty catalog, not an error.
pub fn list_tables(output_dir: impl AsRef<Path>) -> Result<Vec<TableEntry>> {
    let output_dir = output_dir.as_ref();
    let suffix = format!("{}.{}", OUTPUT_SUFFIX, TABLE_EXTENSION);

    let read_dir = match std::fs::read_dir(output_dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Output directory does not exist: {}", output_dir.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Cannot list {}", output_dir.display()));
        }
    };

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.with_context(|| format!("Cannot list {}", output_dir.display()))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if !name.ends_with(&suffix) || !dir_entry.path().is_file() {
            continue;
        }

        let stem = &name[..name.len() - TABLE_EXTENSION.len() - 1];
        let modified = dir_entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        entries.push(TableEntry {
            factor: factor_from_stem(stem),
            path: dir_entry.path(),
            name,
            modified,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} tables in {}", entries.len(), output_dir.display());

    Ok(entries)
}

/// Pick one table through a caller-supplied chooser
///
/// **Public** - replaces interactive file dialogs with an explicit callback
///
/// `choose` sees the listed entries and returns a 0-based index, or None to
/// cancel. Returns None when there is nothing to choose from, the chooser
/// cancels, or its index is out of range.
pub fn select_table<F>(output_dir: impl AsRef<Path>, choose: F) -> Result<Option<PathBuf>>
where
    F: FnOnce(&[TableEntry]) -> Option<usize>,
{
    let entries = list_tables(output_dir.as_ref())?;

    if entries.is_empty() {
        warn!(
            "No '*{}.{}' files found in {}",
            OUTPUT_SUFFIX,
            TABLE_EXTENSION,
            output_dir.as_ref().display()
        );
        return Ok(None);
    }

    match choose(&entries) {
        Some(idx) if idx < entries.len() => Ok(Some(entries[idx].path.clone())),
        Some(idx) => {
            warn!("Invalid selection {}; choose 1-{}", idx + 1, entries.len());
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Pretty JSON for `list --json`
pub fn entries_to_json(entries: &[TableEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize table list")
}
