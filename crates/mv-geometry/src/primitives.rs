//! Screen-space primitives shared by all diagram builders.
//!
//! Screen y grows downward while the diagrams are drawn y-up, so every
//! physical vector goes through [`place`], which flips y once.

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Fixed center of one diagram on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Directed line segment from `(x0, y0)` to `(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Segment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Segment {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn length(&self) -> f64 {
        (self.x1 - self.x0).hypot(self.y1 - self.y0)
    }
}

/// Axis-aligned rectangle by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn around(center: Origin, half_width: f64, half_height: f64) -> Self {
        Self {
            x0: center.x - half_width,
            y0: center.y - half_height,
            x1: center.x + half_width,
            y1: center.y + half_height,
        }
    }
}

/// Semantic color role; the renderer picks the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Tone {
    #[default]
    Neutral,
    Voltage,
    Current,
    Torque,
    Speed,
    /// Phase label whose half-bridge is switched high.
    Switched,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Label {
    pub text: &'static str,
    pub anchor: Point,
    pub tone: Tone,
}

impl Label {
    pub fn new(text: &'static str, anchor: Point, tone: Tone) -> Self {
        Self { text, anchor, tone }
    }
}

/// Place the physical vector `(x, y)` at `origin`, scaled to pixels.
pub fn place(x: f64, y: f64, origin: Origin, scale: f64) -> Segment {
    Segment::new(origin.x, origin.y, origin.x + x * scale, origin.y - y * scale)
}

pub fn place_vector(v: &Vector2<f64>, origin: Origin, scale: f64) -> Segment {
    place(v.x, v.y, origin, scale)
}

/// Reference target drawn instead of an arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Crosshair {
    pub horizontal: Segment,
    pub vertical: Segment,
    pub center: Point,
    pub radius: f64,
}

/// Crosshair centered at `(x, y)` whose vertical tick always reaches back to
/// `reference_y`, whichever side of it the center is on.
pub fn crosshair(x: f64, y: f64, reference_y: f64, radius: f64, width: f64) -> Crosshair {
    let hw = width / 2.0;
    let top = (y - hw).min(reference_y);
    let bottom = (y + hw).max(reference_y);
    Crosshair {
        horizontal: Segment::new(x - hw, y, x + hw, y),
        vertical: Segment::new(x, top, x, bottom),
        center: Point::new(x, y),
        radius,
    }
}
