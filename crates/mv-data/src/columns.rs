//! Column layout of the sample sheet.

use mv_core::SampleRow;
use serde::{Deserialize, Serialize};

use crate::{DataError, DataResult};

/// One spreadsheet cell, reduced to what row unpacking cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Empty,
    Invalid(String),
}

impl Cell {
    /// Parse a text cell. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Invalid(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 0-based column position of every quantity in a sample row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub time_s: usize,
    pub i_sd_ref: usize,
    pub i_sq_ref: usize,
    pub i_sd: usize,
    pub i_sq: usize,
    pub u_sd: usize,
    pub u_sq: usize,
    pub i_mr: usize,
    pub w_r_ref: usize,
    pub w_r: usize,
    pub t_el: usize,
    pub t_load: usize,
    pub theta: usize,
    pub hb1: usize,
    pub hb2: usize,
    pub hb3: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            time_s: 0,
            i_sd_ref: 1,
            i_sq_ref: 2,
            i_sd: 3,
            i_sq: 4,
            u_sd: 5,
            u_sq: 6,
            i_mr: 8,
            w_r_ref: 9,
            w_r: 10,
            t_el: 11,
            t_load: 12,
            theta: 13,
            hb1: 17,
            hb2: 18,
            hb3: 19,
        }
    }
}

impl ColumnMap {
    /// Field names paired with their columns, in row order.
    pub fn fields(&self) -> [(&'static str, usize); 16] {
        [
            ("time_s", self.time_s),
            ("u_sd", self.u_sd),
            ("u_sq", self.u_sq),
            ("i_sd", self.i_sd),
            ("i_sq", self.i_sq),
            ("i_sd_ref", self.i_sd_ref),
            ("i_sq_ref", self.i_sq_ref),
            ("i_mr", self.i_mr),
            ("w_r_ref", self.w_r_ref),
            ("w_r", self.w_r),
            ("t_el", self.t_el),
            ("t_load", self.t_load),
            ("theta", self.theta),
            ("hb1", self.hb1),
            ("hb2", self.hb2),
            ("hb3", self.hb3),
        ]
    }

    /// Minimum number of columns a row must have.
    pub fn width(&self) -> usize {
        self.fields().iter().map(|(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Unpack the cells of row `row` into a sample.
    pub fn unpack(&self, row: usize, cells: &[Cell]) -> DataResult<SampleRow> {
        let get = |field: &'static str, column: usize| -> DataResult<f64> {
            match cells.get(column) {
                None => Err(DataError::MissingColumn { row, column, field }),
                Some(Cell::Empty) => Err(DataError::EmptyCell { row, column, field }),
                Some(Cell::Invalid(value)) => Err(DataError::NotNumeric {
                    row,
                    column,
                    field,
                    value: value.clone(),
                }),
                Some(Cell::Number(v)) if !v.is_finite() => Err(DataError::NotNumeric {
                    row,
                    column,
                    field,
                    value: v.to_string(),
                }),
                Some(Cell::Number(v)) => Ok(*v),
            }
        };

        Ok(SampleRow {
            time_s: get("time_s", self.time_s)?,
            u_sd: get("u_sd", self.u_sd)?,
            u_sq: get("u_sq", self.u_sq)?,
            i_sd: get("i_sd", self.i_sd)?,
            i_sq: get("i_sq", self.i_sq)?,
            i_sd_ref: get("i_sd_ref", self.i_sd_ref)?,
            i_sq_ref: get("i_sq_ref", self.i_sq_ref)?,
            i_mr: get("i_mr", self.i_mr)?,
            w_r_ref: get("w_r_ref", self.w_r_ref)?,
            w_r: get("w_r", self.w_r)?,
            t_el: get("t_el", self.t_el)?,
            t_load: get("t_load", self.t_load)?,
            theta: get("theta", self.theta)?,
            hb1: get("hb1", self.hb1)?,
            hb2: get("hb2", self.hb2)?,
            hb3: get("hb3", self.hb3)?,
        })
    }
}
