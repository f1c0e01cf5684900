//! Rotating inverter hexagon.
//!
//! The hexagon turns with the rotor flux angle so that it lines up with the
//! fixed dq axes of the space-vector diagram. The six spokes and edges are
//! always drawn; the active switching vector is laid over the spoke selected
//! by the sector table.

use mv_core::SampleRow;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::primitives::place_vector;
use crate::{DiagramScales, HexVector, Label, Origin, SectorSelection, Segment, Tone};

/// Angular offset aligning the rotating frame with the dq axes.
pub const FRAME_OFFSET: f64 = -FRAC_PI_2;
/// Phase labels sit just outside the spoke tips.
pub const LABEL_RADIUS_FACTOR: f64 = 1.1;
/// Spokes carrying the phase A, B, C labels.
pub const PHASE_LABEL_SPOKES: [usize; 3] = [0, 2, 4];
const PHASE_LABELS: [&str; 3] = ["A", "B", "C"];

/// Unit spoke directions of the hexagon at one rotation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatingFrame {
    pub theta: f64,
    pub spokes: [Vector2<f64>; 6],
}

impl RotatingFrame {
    /// Frame for a rotor angle as stored in the table.
    pub fn from_rotor_angle(angle: f64) -> Self {
        Self::at(-angle + FRAME_OFFSET)
    }

    /// Frame whose first spoke points at `theta`.
    pub fn at(theta: f64) -> Self {
        let spokes = std::array::from_fn(|k| {
            let a = theta + k as f64 * FRAC_PI_3;
            Vector2::new(a.cos(), a.sin())
        });
        Self { theta, spokes }
    }

    pub fn direction(&self, vector: HexVector) -> Vector2<f64> {
        match vector.spoke() {
            Some(k) => self.spokes[k],
            None => Vector2::zeros(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HexagonGeometry {
    /// Rotation of the first spoke, radians
    pub theta: f64,
    pub selection: SectorSelection,
    /// Selected unit direction, absent when the switch states are invalid
    pub direction: Option<[f64; 2]>,
    /// Active switching vector, absent when the switch states are invalid
    pub active: Option<Segment>,
    pub spokes: [Segment; 6],
    /// Edge `k` joins spoke tip `k` to tip `k + 1`, wrapping at 5
    pub edges: [Segment; 6],
    pub labels: [Label; 3],
}

pub fn build(row: &SampleRow, origin: Origin, scales: &DiagramScales) -> HexagonGeometry {
    let frame = RotatingFrame::from_rotor_angle(row.theta);
    let raw = row.switch_states();
    let selection = SectorSelection::select(raw);

    let direction = selection.vector().ok().map(|v| frame.direction(v));
    let active = direction.map(|d| place_vector(&d, origin, scales.hexagon));

    let spokes = frame.spokes.map(|d| place_vector(&d, origin, scales.hexagon));
    let edges = std::array::from_fn(|k| {
        Segment::between(spokes[k].end(), spokes[(k + 1) % 6].end())
    });

    let labels = std::array::from_fn(|phase| {
        let spoke = frame.spokes[PHASE_LABEL_SPOKES[phase]];
        let anchor = place_vector(&spoke, origin, scales.hexagon * LABEL_RADIUS_FACTOR).end();
        let tone = if raw[phase] == 1.0 {
            Tone::Switched
        } else {
            Tone::Neutral
        };
        Label::new(PHASE_LABELS[phase], anchor, tone)
    });

    HexagonGeometry {
        theta: frame.theta,
        selection,
        direction: direction.map(|d| [d.x, d.y]),
        active,
        spokes,
        edges,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(theta: f64, switches: [f64; 3]) -> SampleRow {
        SampleRow {
            theta,
            hb1: switches[0],
            hb2: switches[1],
            hb3: switches[2],
            ..SampleRow::default()
        }
    }

    const ORIGIN: Origin = Origin::new(650.0, 270.0);

    #[test]
    fn zero_angle_frame_points_down_the_screen() {
        // theta = -pi/2, so spoke 0 is (0, -1) physically, +y on screen
        let g = build(&row(0.0, [0.0, 0.0, 0.0]), ORIGIN, &DiagramScales::default());
        assert!((g.theta + FRAC_PI_2).abs() < 1e-12);
        assert!((g.spokes[0].x1 - 650.0).abs() < 1e-9);
        assert!((g.spokes[0].y1 - 420.0).abs() < 1e-9);
    }

    #[test]
    fn state_011_points_one_sixth_turn_past_theta() {
        let g = build(&row(0.3, [0.0, 1.0, 1.0]), ORIGIN, &DiagramScales::default());
        assert_eq!(g.selection.vector(), Ok(HexVector::V1));
        assert_eq!(g.active, Some(g.spokes[1]));
        let angle = g.theta + FRAC_PI_3;
        let [x, y] = g.direction.unwrap();
        assert!((x - angle.cos()).abs() < 1e-12);
        assert!((y - angle.sin()).abs() < 1e-12);
    }

    #[test]
    fn sector_order_steps_by_one_sixth_turn() {
        let expected = [
            ([0.0, 0.0, 1.0], 2.0),
            ([1.0, 0.0, 1.0], 3.0),
            ([1.0, 0.0, 0.0], 4.0),
            ([1.0, 1.0, 0.0], 5.0),
            ([0.0, 1.0, 0.0], 6.0),
        ];
        for (switches, k) in expected {
            let g = build(&row(-1.2, switches), ORIGIN, &DiagramScales::default());
            let angle = g.theta + k * FRAC_PI_3;
            let [x, y] = g.direction.unwrap();
            assert!((x - angle.cos()).abs() < 1e-12, "{switches:?}");
            assert!((y - angle.sin()).abs() < 1e-12, "{switches:?}");
        }
    }

    #[test]
    fn each_active_state_lands_on_its_spoke() {
        let scales = DiagramScales::default();
        for key in crate::SwitchKey::all() {
            let raw = [key.a, key.b, key.c].map(|b| if b { 1.0 } else { 0.0 });
            let g = build(&row(1.1, raw), ORIGIN, &scales);
            let active = g.active.unwrap();
            match key.vector().spoke() {
                Some(k) => assert_eq!(active, g.spokes[k]),
                None => assert_eq!(active.start(), active.end()),
            }
        }
    }

    #[test]
    fn invalid_states_draw_no_active_vector() {
        let g = build(&row(0.0, [1.0, 2.0, 0.0]), ORIGIN, &DiagramScales::default());
        assert!(!g.selection.is_valid());
        assert!(g.active.is_none());
        assert!(g.direction.is_none());
        // the decorative hexagon is still there
        assert!(g.spokes.iter().all(|s| (s.length() - 150.0).abs() < 1e-9));
    }

    #[test]
    fn labels_follow_switch_states() {
        let g = build(&row(0.0, [1.0, 0.0, 1.0]), ORIGIN, &DiagramScales::default());
        let tones: Vec<Tone> = g.labels.iter().map(|l| l.tone).collect();
        assert_eq!(tones, vec![Tone::Switched, Tone::Neutral, Tone::Switched]);
        let texts: Vec<&str> = g.labels.iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn labels_sit_outside_their_spokes() {
        let g = build(&row(0.7, [0.0, 0.0, 0.0]), ORIGIN, &DiagramScales::default());
        for (label, k) in g.labels.iter().zip(PHASE_LABEL_SPOKES) {
            let dx = label.anchor.x - ORIGIN.x;
            let dy = label.anchor.y - ORIGIN.y;
            assert!((dx.hypot(dy) - 165.0).abs() < 1e-9);
            let tip = g.spokes[k].end();
            assert!((dx * (tip.x - ORIGIN.x) + dy * (tip.y - ORIGIN.y)) > 0.0);
        }
    }

    #[test]
    fn edges_close_the_outline() {
        let g = build(&row(2.0, [0.0, 0.0, 0.0]), ORIGIN, &DiagramScales::default());
        for k in 0..6 {
            assert_eq!(g.edges[k].end(), g.edges[(k + 1) % 6].start());
        }
    }
}
