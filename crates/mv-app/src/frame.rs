//! One composed frame and its console trace.

use mv_core::{CursorPosition, SampleRow};
use mv_geometry::{Diagrams, SectorSelection};
use serde::Serialize;
use std::fmt;

/// Everything the renderer needs for one cursor position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub position: CursorPosition,
    pub row: SampleRow,
    pub diagrams: Diagrams,
}

impl Frame {
    pub fn selection(&self) -> &SectorSelection {
        &self.diagrams.hexagon.selection
    }

    pub fn trace(&self) -> FrameTrace {
        FrameTrace {
            index: self.position.index,
            direction: match self.diagrams.hexagon.direction {
                Some([x, y]) => DirectionTrace::Direction { x, y },
                None => DirectionTrace::Error,
            },
        }
    }
}

/// Selected hexagon direction as printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DirectionTrace {
    Direction { x: f64, y: f64 },
    Error,
}

impl fmt::Display for DirectionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionTrace::Direction { x, y } => write!(f, "({x:.6}, {y:.6})"),
            DirectionTrace::Error => write!(f, "error"),
        }
    }
}

/// Per-frame debug line: sample index and selected direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameTrace {
    pub index: usize,
    pub direction: DirectionTrace,
}

impl fmt::Display for FrameTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_formats_direction() {
        let trace = FrameTrace {
            index: 42,
            direction: DirectionTrace::Direction { x: 0.5, y: -1.0 },
        };
        assert_eq!(trace.to_string(), "42 (0.500000, -1.000000)");
    }

    #[test]
    fn trace_formats_error_marker() {
        let trace = FrameTrace {
            index: 7,
            direction: DirectionTrace::Error,
        };
        assert_eq!(trace.to_string(), "7 error");
    }
}
