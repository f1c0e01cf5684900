//! Torque/speed operating-point quadrant.

use mv_core::SampleRow;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{DiagramScales, Label, Origin, Point, Rect, Segment, Tone, place};

/// Axis length relative to the quadrant frame, to show overshoot.
pub const AXIS_OVERSHOOT: f64 = 1.3;
/// Offset of the quadrant numerals from the origin.
const QUADRANT_LABEL_OFFSET: f64 = 70.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OperatingPointGeometry {
    pub frame: Rect,
    pub speed_axis: Segment,
    pub torque_axis: Segment,
    /// Horizontal level at the load torque
    pub load_torque_level: Segment,
    /// Vertical level at the reference speed
    pub speed_ref_level: Segment,
    /// Origin to `(speed, torque)`
    pub operating_point: Segment,
    /// Horizontal drop-line from the torque axis to the operating point
    pub torque_projection: Segment,
    /// Vertical drop-line from the speed axis to the operating point
    pub speed_projection: Segment,
    pub labels: Vec<Label>,
}

pub fn build(row: &SampleRow, origin: Origin, scales: &DiagramScales) -> OperatingPointGeometry {
    let hw = scales.quadrant_half_width;
    let hh = scales.quadrant_half_height;
    let (ox, oy) = (origin.x, origin.y);

    let frame = Rect::around(origin, hw, hh);
    let speed_axis = Segment::new(ox - hw, oy, ox + hw * AXIS_OVERSHOOT, oy);
    let torque_axis = Segment::new(ox, oy + hh * AXIS_OVERSHOOT, ox, oy - hh * AXIS_OVERSHOOT);

    let load_y = oy - row.t_load * scales.torque();
    let load_torque_level = Segment::new(ox - hw, load_y, ox + hw, load_y);
    let ref_x = ox + row.w_r_ref * scales.speed();
    let speed_ref_level = Segment::new(ref_x, oy - hh, ref_x, oy + hh);

    let speed_px = row.w_r * scales.speed();
    let torque_px = row.t_el * scales.torque();
    let operating_point = place(speed_px, torque_px, origin, 1.0);
    let tip = operating_point.end();
    let torque_projection = Segment::new(ox, tip.y, tip.x, tip.y);
    let speed_projection = Segment::new(tip.x, oy, tip.x, tip.y);

    let q = QUADRANT_LABEL_OFFSET;
    let labels = vec![
        Label::new("I", Point::new(ox + q, oy - q), Tone::Neutral),
        Label::new("IV", Point::new(ox - q, oy - q), Tone::Neutral),
        Label::new("III", Point::new(ox - q, oy + q), Tone::Neutral),
        Label::new("II", Point::new(ox + q, oy + q), Tone::Neutral),
        Label::new("T_el", torque_axis.end().offset(0.0, -15.0), Tone::Torque),
        Label::new("ω_r", speed_axis.end().offset(15.0, 0.0), Tone::Speed),
        Label::new("T_load", Point::new(ox - 50.0, load_y - 10.0), Tone::Torque),
        Label::new("ω_r*", Point::new(ref_x + 17.0, oy + 50.0), Tone::Speed),
    ];

    OperatingPointGeometry {
        frame,
        speed_axis,
        torque_axis,
        load_torque_level,
        speed_ref_level,
        operating_point,
        torque_projection,
        speed_projection,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Origin = Origin::new(1050.0, 270.0);

    fn row() -> SampleRow {
        SampleRow {
            w_r_ref: 1.0,
            w_r: 0.8,
            t_el: 0.4,
            t_load: 0.5,
            ..SampleRow::default()
        }
    }

    #[test]
    fn frame_and_axes() {
        let g = build(&row(), ORIGIN, &DiagramScales::default());
        assert_eq!(g.frame, Rect::around(ORIGIN, 150.0, 150.0));
        assert_eq!(g.speed_axis, Segment::new(900.0, 270.0, 1245.0, 270.0));
        assert_eq!(g.torque_axis, Segment::new(1050.0, 465.0, 1050.0, 75.0));
    }

    #[test]
    fn reference_levels() {
        let g = build(&row(), ORIGIN, &DiagramScales::default());
        assert_eq!(g.load_torque_level, Segment::new(900.0, 213.75, 1200.0, 213.75));
        assert_eq!(g.speed_ref_level, Segment::new(1185.0, 120.0, 1185.0, 420.0));
    }

    #[test]
    fn drop_lines_meet_at_operating_point() {
        let g = build(&row(), ORIGIN, &DiagramScales::default());
        let tip = g.operating_point.end();
        assert_eq!(g.operating_point.start(), ORIGIN.point());
        assert_eq!(g.torque_projection.end(), tip);
        assert_eq!(g.speed_projection.end(), tip);
        // one drop-line starts on each axis
        assert_eq!(g.torque_projection.x0, ORIGIN.x);
        assert_eq!(g.speed_projection.y0, ORIGIN.y);
        assert!((tip.x - (1050.0 + 0.8 * 135.0)).abs() < 1e-9);
        assert!((tip.y - (270.0 - 0.4 * 112.5)).abs() < 1e-9);
    }

    #[test]
    fn generating_quadrant_goes_below_axis() {
        let braking = SampleRow {
            w_r: 0.5,
            t_el: -0.5,
            ..SampleRow::default()
        };
        let g = build(&braking, ORIGIN, &DiagramScales::default());
        assert!(g.operating_point.y1 > ORIGIN.y);
    }
}
