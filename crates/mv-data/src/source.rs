//! Spreadsheet readers.
//!
//! Workbooks (xlsx, xlsm, xls, ods) are read through calamine, CSV files
//! through the csv crate. Neither format has a header row: every row is a
//! sample.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use crate::{Cell, ColumnMap, DataError, DataResult, SampleTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(SourceFormat::Workbook),
            Some("csv") => Ok(SourceFormat::Csv),
            _ => Err(DataError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load and unpack every row of `sheet` in the file at `path`.
///
/// `sheet` is ignored for CSV input.
pub fn load_table(path: &Path, sheet: &str, columns: &ColumnMap) -> DataResult<SampleTable> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = SourceFormat::from_path(path)?;
    let raw = match format {
        SourceFormat::Workbook => read_workbook(path, sheet)?,
        SourceFormat::Csv => read_csv(path)?,
    };

    let mut rows = Vec::with_capacity(raw.len());
    // Indices count blank rows too, so errors name the row as it sits in the file.
    for (index, cells) in raw
        .iter()
        .enumerate()
        .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
    {
        rows.push(columns.unpack(index, cells)?);
    }

    tracing::info!(
        path = %path.display(),
        sheet,
        samples = rows.len(),
        "loaded sample table"
    );

    let sheet = match format {
        SourceFormat::Workbook => Some(sheet.to_string()),
        SourceFormat::Csv => None,
    };
    SampleTable::new(path.to_path_buf(), sheet, rows)
}

fn read_workbook(path: &Path, sheet: &str) -> DataResult<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(DataError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    // Ranges start at the first used cell; pad so row and column indices stay absolute.
    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows = vec![Vec::new(); row_offset];
    rows.extend(range.rows().map(|row| {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(workbook_cell));
        cells
    }));
    Ok(rows)
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Float(v) => Cell::Number(*v),
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => Cell::parse(s),
        Data::Empty => Cell::Empty,
        other => Cell::Invalid(other.to_string()),
    }
}

fn read_csv(path: &Path) -> DataResult<Vec<Vec<Cell>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // The reader drops empty lines; keep their slots so row == line - 1.
        if let Some(line) = record.position().map(|p| p.line() as usize) {
            while rows.len() + 1 < line {
                rows.push(Vec::new());
            }
        }
        rows.push(record.iter().map(Cell::parse).collect());
    }
    Ok(rows)
}
