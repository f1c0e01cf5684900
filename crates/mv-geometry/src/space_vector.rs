//! Space-vector diagram: dq axes with voltage and current vectors.

use mv_core::SampleRow;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Crosshair, DiagramScales, Label, Origin, Segment, Tone, crosshair, place};

/// Half length of the dq axes.
pub const AXIS_RADIUS: f64 = 180.0;
pub const CROSSHAIR_RADIUS: f64 = 10.0;
pub const CROSSHAIR_WIDTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SpaceVectorGeometry {
    pub d_axis: Segment,
    pub q_axis: Segment,
    /// Commanded stator voltage `u_s*`
    pub voltage: Segment,
    /// Stator current `i_s`
    pub current: Segment,
    /// Reference stator current `i_s*`, drawn as [`Self::reference_marker`]
    pub current_ref: Segment,
    /// Magnetizing current `i_mr`, on the d axis
    pub magnetizing: Segment,
    pub reference_marker: Crosshair,
    pub labels: Vec<Label>,
}

pub fn build(row: &SampleRow, origin: Origin, scales: &DiagramScales) -> SpaceVectorGeometry {
    let d_axis = Segment::new(
        origin.x - AXIS_RADIUS,
        origin.y,
        origin.x + AXIS_RADIUS,
        origin.y,
    );
    let q_axis = Segment::new(
        origin.x,
        origin.y + AXIS_RADIUS,
        origin.x,
        origin.y - AXIS_RADIUS,
    );

    let voltage = place(row.u_sd, row.u_sq, origin, scales.voltage);
    let current = place(row.i_sd, row.i_sq, origin, scales.current);
    let current_ref = place(row.i_sd_ref, row.i_sq_ref, origin, scales.current);
    let magnetizing = place(row.i_mr, 0.0, origin, scales.current);

    let reference_marker = crosshair(
        current_ref.x1,
        current_ref.y1,
        origin.y,
        CROSSHAIR_RADIUS,
        CROSSHAIR_WIDTH,
    );

    let labels = vec![
        Label::new("d", d_axis.end().offset(10.0, 0.0), Tone::Neutral),
        Label::new("q", q_axis.end().offset(10.0, 0.0), Tone::Neutral),
        Label::new("u_s*", voltage.end().offset(-25.0, 0.0), Tone::Voltage),
        Label::new("i_s", current.end().offset(25.0, 15.0), Tone::Current),
        Label::new("i_s*", current_ref.end().offset(25.0, -7.0), Tone::Current),
        Label::new("i_mr", magnetizing.end().offset(15.0, 7.0), Tone::Current),
    ];

    SpaceVectorGeometry {
        d_axis,
        q_axis,
        voltage,
        current,
        current_ref,
        magnetizing,
        reference_marker,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SampleRow {
        SampleRow {
            u_sd: 100.0,
            u_sq: 200.0,
            i_sd: 0.5,
            i_sq: -0.25,
            i_sd_ref: 0.4,
            i_sq_ref: 0.3,
            i_mr: 0.6,
            ..SampleRow::default()
        }
    }

    #[test]
    fn axes_ignore_row_data() {
        let origin = Origin::new(250.0, 270.0);
        let a = build(&row(), origin, &DiagramScales::default());
        let b = build(&SampleRow::default(), origin, &DiagramScales::default());
        assert_eq!(a.d_axis, b.d_axis);
        assert_eq!(a.q_axis, b.q_axis);
        assert_eq!(a.d_axis, Segment::new(70.0, 270.0, 430.0, 270.0));
        assert_eq!(a.q_axis, Segment::new(250.0, 450.0, 250.0, 90.0));
    }

    #[test]
    fn vectors_use_their_scales() {
        let origin = Origin::new(250.0, 270.0);
        let g = build(&row(), origin, &DiagramScales::default());
        assert_eq!(g.voltage, Segment::new(250.0, 270.0, 300.0, 170.0));
        assert_eq!(g.current, Segment::new(250.0, 270.0, 300.0, 295.0));
    }

    #[test]
    fn magnetizing_current_lies_on_d_axis() {
        let g = build(&row(), Origin::new(250.0, 270.0), &DiagramScales::default());
        assert_eq!(g.magnetizing.y1, 270.0);
        assert!((g.magnetizing.x1 - 310.0).abs() < 1e-9);
    }

    #[test]
    fn crosshair_sits_on_reference_tip() {
        let origin = Origin::new(250.0, 270.0);
        let g = build(&row(), origin, &DiagramScales::default());
        assert_eq!(g.reference_marker.center, g.current_ref.end());
        assert_eq!(g.reference_marker.radius, CROSSHAIR_RADIUS);
        // tip is above the origin, so the tick reaches down to the d axis
        assert_eq!(g.reference_marker.vertical.y1, origin.y);
    }
}
