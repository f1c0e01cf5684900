//! mv-geometry: sample rows to diagram primitives.
//!
//! Three independent builders turn one [`mv_core::SampleRow`] into plain
//! line/point/label values in screen coordinates:
//!
//! - [`space_vector`]: dq axes, voltage and current space vectors
//! - [`hexagon`]: rotating inverter hexagon and the active switching vector
//! - [`operating_point`]: torque/speed quadrant with reference levels
//!
//! Every builder is a pure function of the row, its diagram [`Origin`] and the
//! [`DiagramScales`]; nothing survives between frames.

pub mod error;
pub mod hexagon;
pub mod layout;
pub mod operating_point;
pub mod primitives;
pub mod sector;
pub mod space_vector;

pub use error::{GeometryError, GeometryResult};
pub use hexagon::HexagonGeometry;
pub use layout::{DiagramLayout, DiagramScales};
pub use operating_point::OperatingPointGeometry;
pub use primitives::{Crosshair, Label, Origin, Point, Rect, Segment, Tone, crosshair, place};
pub use sector::{HexVector, SECTOR_TABLE, SectorSelection, SwitchKey};
pub use space_vector::SpaceVectorGeometry;

use mv_core::SampleRow;

#[cfg(feature = "serde")]
use serde::Serialize;

/// All three diagrams of one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagrams {
    pub space_vector: SpaceVectorGeometry,
    pub hexagon: HexagonGeometry,
    pub operating_point: OperatingPointGeometry,
}

pub fn build_diagrams(row: &SampleRow, layout: &DiagramLayout, scales: &DiagramScales) -> Diagrams {
    Diagrams {
        space_vector: space_vector::build(row, layout.space_vector, scales),
        hexagon: hexagon::build(row, layout.hexagon, scales),
        operating_point: operating_point::build(row, layout.operating_point, scales),
    }
}
