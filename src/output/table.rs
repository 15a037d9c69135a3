//! CSV writer for estimate tables.

use super::{calculate_file_size, finalize, stage_beside};
use crate::table::EstimateTable;
use crate::utils::error::OutputError;
use log::{info, warn};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write an estimate table to a CSV file
///
/// **Public** - main entry point for table output
///
/// The header row is written first, then one record per row with the
/// password length in the first column. Column order matches the table.
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` / `OutputError::CsvFailed` - I/O error during write
pub fn write_table(table: &EstimateTable, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_tables(&[(table, output_path.as_ref())])
}

/// Write several tables as one unit
///
/// **Public** - used when a transform produces more than one file
///
/// Every table is staged before any destination is touched. If a rename
/// fails part-way, destinations already moved into place are removed, so
/// either all files land or none do.
pub fn write_tables(tables: &[(&EstimateTable, &Path)]) -> Result<(), OutputError> {
    let mut staged = Vec::with_capacity(tables.len());
    for (table, path) in tables {
        info!("Writing table to: {}", path.display());
        staged.push((stage_table(table, path)?, *path));
    }

    let mut committed: Vec<&Path> = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        if let Err(e) = finalize(file, path) {
            for done in &committed {
                if let Err(cleanup) = std::fs::remove_file(done) {
                    warn!("Could not remove {}: {}", done.display(), cleanup);
                }
            }
            return Err(e);
        }
        committed.push(path);
    }

    for (table, path) in tables {
        info!(
            "Table written successfully ({} rows, {} bytes)",
            table.row_count(),
            calculate_file_size(path)
        );
    }

    Ok(())
}

fn stage_table(table: &EstimateTable, output_path: &Path) -> Result<NamedTempFile, OutputError> {
    let mut staged = stage_beside(output_path, ".csv")?;

    {
        let mut writer = csv::Writer::from_writer(staged.as_file_mut());

        writer.write_record(table.headers())?;
        for row in &table.rows {
            writer.write_record(
                std::iter::once(row.length.to_string()).chain(row.cells.iter().cloned()),
            )?;
        }

        writer.flush()?;
    }

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::read_table;

    fn sample() -> EstimateTable {
        let mut table = EstimateTable::new(
            "Number of Characters",
            vec!["Numbers Only".to_string(), "Upper, Lower".to_string()],
        );
        table
            .push_row(4, vec!["Instantly".to_string(), "5 seconds".to_string()])
            .unwrap();
        table
    }

    #[test]
    fn test_write_and_read_table() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("100_output.csv");

        write_table(&sample(), &path).unwrap();

        let loaded = read_table(&path, "Number of Characters").unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_quotes_headers_with_commas() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("t.csv");

        write_table(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Number of Characters,Numbers Only,\"Upper, Lower\"\n"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/t.csv");

        write_table(&sample(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("t.csv");

        write_table(&sample(), &path).unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("t.csv")]);
    }

    #[test]
    fn test_directory_target_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_table(&sample(), temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_tables_all_or_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let good = temp_dir.path().join("100_output.csv");
        let blocked = temp_dir.path().join("old.csv");
        std::fs::create_dir(&blocked).unwrap();

        let result = write_tables(&[(&sample(), good.as_path()), (&sample(), blocked.as_path())]);

        assert!(result.is_err());
        assert!(!good.exists());
        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("old.csv")]);
    }

    #[test]
    fn test_write_tables_writes_each() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("a.csv");
        let second = temp_dir.path().join("b.csv");

        write_tables(&[(&sample(), first.as_path()), (&sample(), second.as_path())]).unwrap();

        assert_eq!(read_table(&first, "Number of Characters").unwrap(), sample());
        assert_eq!(read_table(&second, "Number of Characters").unwrap(), sample());
    }
}
