//! An opened sample table together with its cursor and diagram layout.

use mv_core::{CursorInputs, CursorPosition, TimeCursor, s};
use mv_data::{SampleTable, load_table};
use mv_geometry::{DiagramLayout, DiagramScales, SectorSelection, build_diagrams};
use serde::Serialize;

use crate::config::ViewerConfig;
use crate::error::AppResult;
use crate::frame::Frame;

/// Immutable state of one viewing session.
#[derive(Debug, Clone)]
pub struct Session {
    table: SampleTable,
    cursor: TimeCursor,
    layout: DiagramLayout,
    scales: DiagramScales,
}

/// Overview of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub source: String,
    pub sheet: Option<String>,
    pub sample_count: usize,
    pub total_duration_s: f64,
    pub time_range: (f64, f64),
    pub cursor_bounds: [i64; 4],
    /// Rows whose switch states select no hexagon sector
    pub invalid_switch_rows: usize,
}

impl Session {
    /// Load the configured table. Any failure here is fatal for the viewer.
    pub fn open(config: &ViewerConfig) -> AppResult<Self> {
        config.validate()?;
        let table = load_table(&config.data.path, &config.data.sheet, &config.data.columns)?;
        Self::from_table(table, config)
    }

    pub fn from_table(table: SampleTable, config: &ViewerConfig) -> AppResult<Self> {
        let cursor = TimeCursor::new(
            table.len(),
            s(config.data.total_duration_s),
            config.cursor.zooms,
        )?;

        let session = Self {
            table,
            cursor,
            layout: config.diagram_layout(),
            scales: config.scales,
        };

        let invalid = session.invalid_switch_rows().len();
        if invalid > 0 {
            tracing::warn!(
                rows = invalid,
                "switch states outside the sector table; those frames show an error marker"
            );
        }
        Ok(session)
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    pub fn cursor(&self) -> &TimeCursor {
        &self.cursor
    }

    pub fn layout(&self) -> &DiagramLayout {
        &self.layout
    }

    pub fn scales(&self) -> &DiagramScales {
        &self.scales
    }

    /// Frame for the current cursor inputs.
    pub fn frame(&self, inputs: CursorInputs) -> AppResult<Frame> {
        self.compose(self.cursor.position(inputs))
    }

    /// Frame for an explicit sample index (clamped to the table).
    pub fn frame_at(&self, index: usize) -> AppResult<Frame> {
        self.compose(self.cursor.position_at(index))
    }

    fn compose(&self, position: CursorPosition) -> AppResult<Frame> {
        let row = *self.table.row(position.index)?;
        let diagrams = build_diagrams(&row, &self.layout, &self.scales);
        tracing::debug!(index = position.index, time_ms = position.time_ms, "frame");
        Ok(Frame {
            position,
            row,
            diagrams,
        })
    }

    /// Indices of rows whose switch states are not exact binary levels.
    pub fn invalid_switch_rows(&self) -> Vec<usize> {
        self.table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| !SectorSelection::select(row.switch_states()).is_valid())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn summary(&self) -> TableSummary {
        let rows = self.table.rows();
        let t_min = rows.first().map(|r| r.time_s).unwrap_or(0.0);
        let t_max = rows.last().map(|r| r.time_s).unwrap_or(0.0);
        TableSummary {
            source: self.table.source().display().to_string(),
            sheet: self.table.sheet().map(str::to_string),
            sample_count: self.table.len(),
            total_duration_s: mv_core::as_s(self.cursor.total_duration()),
            time_range: (t_min, t_max),
            cursor_bounds: self.cursor.bounds(),
            invalid_switch_rows: self.invalid_switch_rows().len(),
        }
    }
}
