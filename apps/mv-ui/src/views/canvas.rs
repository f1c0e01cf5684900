//! Maps fixed-size canvas coordinates onto the available screen rect.

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use mv_geometry::{Point, Segment};

/// Uniform scale plus offset that letterboxes the logical canvas into a rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    offset: Vec2,
    scale: f32,
}

impl CanvasTransform {
    pub fn fit(available: Rect, width: f64, height: f64) -> Self {
        let (w, h) = (width as f32, height as f32);
        let scale = (available.width() / w).min(available.height() / h).max(0.0);
        let used = vec2(w * scale, h * scale);
        let offset = available.min.to_vec2() + (available.size() - used) / 2.0;
        Self { offset, scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pos(&self, p: Point) -> Pos2 {
        pos2(p.x as f32 * self.scale, p.y as f32 * self.scale) + self.offset
    }

    pub fn segment(&self, s: &Segment) -> [Pos2; 2] {
        [self.pos(s.start()), self.pos(s.end())]
    }

    pub fn length(&self, logical: f64) -> f32 {
        logical as f32 * self.scale
    }

    /// Screen rect covered by the whole logical canvas.
    pub fn canvas_rect(&self, width: f64, height: f64) -> Rect {
        Rect::from_min_max(
            self.pos(Point::new(0.0, 0.0)),
            self.pos(Point::new(width, height)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_same_size_is_identity() {
        let available = Rect::from_min_size(Pos2::ZERO, vec2(1300.0, 500.0));
        let t = CanvasTransform::fit(available, 1300.0, 500.0);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.pos(Point::new(650.0, 270.0)), pos2(650.0, 270.0));
    }

    #[test]
    fn fit_letterboxes_wide_rect() {
        let available = Rect::from_min_size(pos2(10.0, 20.0), vec2(2000.0, 250.0));
        let t = CanvasTransform::fit(available, 1300.0, 500.0);
        assert_eq!(t.scale(), 0.5);
        let rect = t.canvas_rect(1300.0, 500.0);
        assert_eq!(rect.height(), 250.0);
        assert_eq!(rect.width(), 650.0);
        assert_eq!(rect.center(), available.center());
    }

    #[test]
    fn segment_keeps_direction() {
        let available = Rect::from_min_size(Pos2::ZERO, vec2(650.0, 250.0));
        let t = CanvasTransform::fit(available, 1300.0, 500.0);
        let [a, b] = t.segment(&Segment::new(0.0, 0.0, 100.0, -40.0));
        assert_eq!(a, Pos2::ZERO);
        assert_eq!(b, pos2(50.0, -20.0));
    }
}
