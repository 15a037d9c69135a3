//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a duration string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid duration format: {0:?}")]
    Malformed(String),

    #[error("Unknown time unit {unit:?} in {text:?}")]
    UnknownUnit { text: String, unit: String },

    #[error("Unknown magnitude prefix {prefix:?} in {text:?}")]
    UnknownPrefix { text: String, prefix: String },
}

/// Errors that can occur while reading an estimate table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("First column must be {expected:?}, found {found:?}")]
    MissingLengthColumn { expected: String, found: String },

    #[error("Table has no complexity category columns")]
    NoCategories,

    #[error("Row {row}: password length must be a positive integer, found {value:?}")]
    InvalidLength { row: usize, value: String },

    #[error("Row {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur while scaling a table
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Speedup factor must be a positive finite number, got {0}")]
    InvalidFactor(f64),

    #[error("Row {row} (length {length}), column {column:?}: {source}")]
    Cell {
        row: usize,
        length: u32,
        column: String,
        #[source]
        source: ParseError,
    },

    #[error("Row {row} (length {length}), column {column:?}: scaled duration is not finite")]
    Overflow {
        row: usize,
        length: u32,
        column: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors that can occur while rendering a heat-map
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Table has no data to render ({rows} rows, {columns} category columns)")]
    EmptyTable { rows: usize, columns: usize },

    #[error("Row {row} (length {length}), column {column:?}: {source}")]
    Cell {
        row: usize,
        length: u32,
        column: String,
        #[source]
        source: ParseError,
    },

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
