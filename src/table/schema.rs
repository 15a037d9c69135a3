//! In-memory estimate table.
//!
//! Layout mirrors the CSV on disk: one password-length column followed by
//! one column per complexity category, every cell a duration string.

use crate::utils::error::TableError;

/// One row: a password length and its duration cells
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRow {
    /// Number of characters in the password
    pub length: u32,

    /// Duration strings, one per category, in column order
    pub cells: Vec<String>,
}

/// A password-length x complexity-category table of duration strings
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateTable {
    /// Header of the first column (e.g. "Number of Characters")
    pub length_header: String,

    /// Complexity category headers, in column order
    pub categories: Vec<String>,

    pub rows: Vec<EstimateRow>,
}

impl EstimateTable {
    pub fn new(length_header: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            length_header: length_header.into(),
            categories,
            rows: Vec::new(),
        }
    }

    /// Append a row, enforcing that it has one cell per category
    pub fn push_row(&mut self, length: u32, cells: Vec<String>) -> Result<(), TableError> {
        if cells.len() != self.categories.len() {
            return Err(TableError::RaggedRow {
                row: self.rows.len() + 1,
                expected: self.categories.len() + 1,
                found: cells.len() + 1,
            });
        }
        self.rows.push(EstimateRow { length, cells });
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.categories.len()
    }

    /// True when there is nothing to scale or draw
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.categories.is_empty()
    }

    /// Full header row, length column first
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.length_header.as_str()).chain(self.categories.iter().map(String::as_str))
    }

    /// Build a new table with the same shape by rewriting every data cell.
    ///
    /// `f` receives (1-based row index, row, column index, cell text). The
    /// first error aborts and nothing is returned.
    pub fn map_cells<E, F>(&self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize, &EstimateRow, usize, &str) -> Result<String, E>,
    {
        let mut rows = Vec::with_capacity(self.rows.len());

        for (idx, row) in self.rows.iter().enumerate() {
            let cells = row
                .cells
                .iter()
                .enumerate()
                .map(|(col, cell)| f(idx + 1, row, col, cell))
                .collect::<Result<Vec<_>, E>>()?;

            rows.push(EstimateRow {
                length: row.length,
                cells,
            });
        }

        Ok(Self {
            length_header: self.length_header.clone(),
            categories: self.categories.clone(),
            rows,
        })
    }
}
