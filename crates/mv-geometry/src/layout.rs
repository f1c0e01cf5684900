//! Diagram placement and pixel-per-unit scales.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Origin;

/// Per-diagram scale factors, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagramScales {
    /// Space-vector diagram, voltage vectors
    pub voltage: f64,
    /// Space-vector diagram, current vectors
    pub current: f64,
    /// Hexagon spoke length
    pub hexagon: f64,
    /// Operating-point quadrant half width
    pub quadrant_half_width: f64,
    /// Operating-point quadrant half height
    pub quadrant_half_height: f64,
    /// Speed scale as a fraction of the quadrant half height
    pub speed_factor: f64,
    /// Torque scale as a fraction of the quadrant half width
    pub torque_factor: f64,
}

impl Default for DiagramScales {
    fn default() -> Self {
        Self {
            voltage: 0.5,
            current: 100.0,
            hexagon: 150.0,
            quadrant_half_width: 150.0,
            quadrant_half_height: 150.0,
            speed_factor: 0.9,
            torque_factor: 0.75,
        }
    }
}

impl DiagramScales {
    pub fn speed(&self) -> f64 {
        self.speed_factor * self.quadrant_half_height
    }

    pub fn torque(&self) -> f64 {
        self.torque_factor * self.quadrant_half_width
    }
}

/// Centers of the three diagrams, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiagramLayout {
    pub space_vector: Origin,
    pub hexagon: Origin,
    pub operating_point: Origin,
}

impl DiagramLayout {
    /// Three centers at height `drop`, `spacing` apart around the canvas middle.
    pub fn centered(canvas_width: f64, drop: f64, spacing: f64) -> Self {
        let mid = canvas_width / 2.0;
        Self {
            space_vector: Origin::new(mid - spacing, drop),
            hexagon: Origin::new(mid, drop),
            operating_point: Origin::new(mid + spacing, drop),
        }
    }
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self::centered(1300.0, 270.0, 400.0)
    }
}
