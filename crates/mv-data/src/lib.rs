//! mv-data: sample table loading and row unpacking.
//!
//! A table is read once from a spreadsheet (workbook sheet or CSV), every row
//! is unpacked through a [`ColumnMap`] into an immutable
//! [`mv_core::SampleRow`], and the result is served by index.

pub mod columns;
pub mod source;
pub mod table;

pub use columns::{Cell, ColumnMap};
pub use source::{SourceFormat, load_table};
pub use table::SampleTable;

use std::path::PathBuf;

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported data file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: column {column} ({field}) is missing")]
    MissingColumn {
        row: usize,
        column: usize,
        field: &'static str,
    },

    #[error("Row {row}: column {column} ({field}) is empty")]
    EmptyCell {
        row: usize,
        column: usize,
        field: &'static str,
    },

    #[error("Row {row}: column {column} ({field}) is not numeric: {value:?}")]
    NotNumeric {
        row: usize,
        column: usize,
        field: &'static str,
        value: String,
    },

    #[error("No sample rows in {}", .path.display())]
    EmptyTable { path: PathBuf },

    #[error("Sample index out of bounds (index={index}, len={len})")]
    RowOob { index: usize, len: usize },
}
