//! CSV reader for estimate tables.
//!
//! Enforces the table shape at read time so later stages can assume it:
//! header row present, first column is the password length, every row is
//! as wide as the header.

use super::schema::EstimateTable;
use crate::utils::error::TableError;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read an estimate table from a CSV file
///
/// **Public** - main entry point for loading input and transformed tables
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `length_column` - Expected header of the first column
///
/// # Errors
/// * `TableError::NotFound` - file does not exist
/// * `TableError::MissingLengthColumn` - first header is not the length column
/// * `TableError::InvalidLength` - a length cell is not a positive integer
/// * `TableError::RaggedRow` - a row is narrower or wider than the header
pub fn read_table(path: impl AsRef<Path>, length_column: &str) -> Result<EstimateTable, TableError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TableError::NotFound(path.to_path_buf()));
    }

    debug!("Reading estimate table: {}", path.display());

    let file = File::open(path)?;
    let table = read_table_from(file, length_column)?;

    debug!(
        "Loaded {} rows x {} categories from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );

    Ok(table)
}

/// Read an estimate table from any reader
pub fn read_table_from<R: Read>(reader: R, length_column: &str) -> Result<EstimateTable, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let first = headers.get(0).unwrap_or("");
    if !first.eq_ignore_ascii_case(length_column.trim()) {
        return Err(TableError::MissingLengthColumn {
            expected: length_column.to_string(),
            found: first.to_string(),
        });
    }

    let categories: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    if categories.is_empty() {
        return Err(TableError::NoCategories);
    }

    let mut table = EstimateTable::new(first, categories);

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        if record.len() != headers.len() {
            return Err(TableError::RaggedRow {
                row,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let raw_length = record.get(0).unwrap_or("");
        let length = match raw_length.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(TableError::InvalidLength {
                    row,
                    value: raw_length.to_string(),
                })
            }
        };

        let cells = record.iter().skip(1).map(str::to_string).collect();
        table.push_row(length, cells)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Number of Characters,Numbers Only,Lowercase Letters
4,Instantly,1 second
6,1 second,1 minute
";

    #[test]
    fn test_read_sample() {
        let table = read_table_from(SAMPLE.as_bytes(), "Number of Characters").unwrap();

        assert_eq!(table.categories, vec!["Numbers Only", "Lowercase Letters"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].length, 4);
        assert_eq!(table.rows[1].cells[1], "1 minute");
    }

    #[test]
    fn test_length_header_case_insensitive() {
        let table = read_table_from(SAMPLE.as_bytes(), "number of characters").unwrap();
        assert_eq!(table.length_header, "Number of Characters");
    }

    #[test]
    fn test_wrong_first_column() {
        let csv = "Category,Numbers Only\n4,Instantly\n";
        let result = read_table_from(csv.as_bytes(), "Number of Characters");
        assert!(matches!(result, Err(TableError::MissingLengthColumn { .. })));
    }

    #[test]
    fn test_no_categories() {
        let csv = "Number of Characters\n4\n";
        let result = read_table_from(csv.as_bytes(), "Number of Characters");
        assert!(matches!(result, Err(TableError::NoCategories)));
    }

    #[test]
    fn test_non_numeric_length() {
        let csv = "Number of Characters,Numbers Only\nfour,Instantly\n";
        let result = read_table_from(csv.as_bytes(), "Number of Characters");
        assert!(matches!(result, Err(TableError::InvalidLength { row: 1, .. })));
    }

    #[test]
    fn test_zero_length_rejected() {
        let csv = "Number of Characters,Numbers Only\n0,Instantly\n";
        let result = read_table_from(csv.as_bytes(), "Number of Characters");
        assert!(matches!(result, Err(TableError::InvalidLength { .. })));
    }

    #[test]
    fn test_ragged_row() {
        let csv = "Number of Characters,Numbers Only,Lowercase Letters\n4,Instantly\n";
        let result = read_table_from(csv.as_bytes(), "Number of Characters");
        assert!(matches!(
            result,
            Err(TableError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_table("/no/such/input.csv", "Number of Characters");
        assert!(matches!(result, Err(TableError::NotFound(_))));
    }
}
