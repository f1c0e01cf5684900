//! In-memory sample table.

use mv_core::SampleRow;
use std::path::{Path, PathBuf};

use crate::{DataError, DataResult};

/// Immutable time series loaded from one sheet.
#[derive(Debug, Clone)]
pub struct SampleTable {
    source: PathBuf,
    sheet: Option<String>,
    rows: Vec<SampleRow>,
}

impl SampleTable {
    pub fn new(source: PathBuf, sheet: Option<String>, rows: Vec<SampleRow>) -> DataResult<Self> {
        if rows.is_empty() {
            return Err(DataError::EmptyTable { path: source });
        }
        Ok(Self {
            source,
            sheet,
            rows,
        })
    }

    /// Build a table that did not come from a file.
    pub fn from_rows(rows: Vec<SampleRow>) -> DataResult<Self> {
        Self::new(PathBuf::from("<memory>"), None, rows)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> DataResult<&SampleRow> {
        self.rows.get(index).ok_or(DataError::RowOob {
            index,
            len: self.rows.len(),
        })
    }

    /// One quantity over the whole table as `[time_s, value]` pairs.
    pub fn series(&self, value: impl Fn(&SampleRow) -> f64) -> Vec<[f64; 2]> {
        self.rows.iter().map(|r| [r.time_s, value(r)]).collect()
    }
}
