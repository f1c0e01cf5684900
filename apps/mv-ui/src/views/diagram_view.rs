//! Paints one composed frame onto the canvas.

use super::canvas::CanvasTransform;
use egui::emath::Rot2;
use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};
use mv_app::{CanvasConfig, Frame};
use mv_geometry::{
    Crosshair, HexagonGeometry, Label, OperatingPointGeometry, Point, Segment,
    SpaceVectorGeometry, Tone,
};

const DASH: f32 = 4.0;
const GAP: f32 = 2.0;
const ARROW_TIP: f32 = 8.0;
const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
const GREEN: Color32 = Color32::from_rgb(0, 128, 0);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Neutral => Color32::BLACK,
        Tone::Voltage => Color32::BLUE,
        Tone::Current | Tone::Switched => Color32::RED,
        Tone::Torque => PURPLE,
        Tone::Speed => GREEN,
    }
}

fn label_size(text: &str) -> f32 {
    match text {
        "I" | "II" | "III" | "IV" => 16.0,
        _ => 12.0,
    }
}

pub struct DiagramView {
    pub show_error_marker: bool,
}

impl Default for DiagramView {
    fn default() -> Self {
        Self {
            show_error_marker: true,
        }
    }
}

impl DiagramView {
    pub fn show(&mut self, ui: &mut egui::Ui, frame: &Frame, canvas: &CanvasConfig) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let t = CanvasTransform::fit(response.rect, canvas.width, canvas.height);
        let pen = Pen {
            painter: &painter,
            t,
        };

        painter.rect_filled(t.canvas_rect(canvas.width, canvas.height), 0.0, Color32::WHITE);

        pen.text(
            Point::new(canvas.width / 2.0, 50.0),
            &canvas.title,
            20.0,
            Color32::BLACK,
        );
        pen.text(
            Point::new(100.0, canvas.height - 15.0),
            &format!("Time: {:.3} ms", frame.position.time_ms),
            14.0,
            Color32::BLACK,
        );

        pen.space_vector(&frame.diagrams.space_vector);
        pen.hexagon(&frame.diagrams.hexagon, self.show_error_marker);
        pen.operating_point(&frame.diagrams.operating_point);
    }
}

/// Painter bound to one canvas transform.
struct Pen<'a> {
    painter: &'a Painter,
    t: CanvasTransform,
}

impl Pen<'_> {
    fn stroke(&self, width: f32, color: Color32) -> Stroke {
        Stroke::new(width * self.t.scale().max(0.5), color)
    }

    fn line(&self, seg: &Segment, stroke: Stroke) {
        self.painter.line_segment(self.t.segment(seg), stroke);
    }

    fn dashed(&self, seg: &Segment, stroke: Stroke) {
        let points = self.t.segment(seg);
        self.painter.extend(Shape::dashed_line(
            &points,
            stroke,
            self.t.length(DASH as f64),
            self.t.length(GAP as f64),
        ));
    }

    fn arrow_head(&self, seg: &Segment, stroke: Stroke) {
        let [from, tip] = self.t.segment(seg);
        let dir = tip - from;
        if dir.length() < f32::EPSILON {
            return;
        }
        let dir = dir.normalized() * self.t.length(ARROW_TIP as f64);
        let rot = Rot2::from_angle(std::f32::consts::TAU / 14.0);
        self.painter.line_segment([tip, tip - rot * dir], stroke);
        self.painter.line_segment([tip, tip - rot.inverse() * dir], stroke);
    }

    fn arrow(&self, seg: &Segment, stroke: Stroke) {
        self.line(seg, stroke);
        self.arrow_head(seg, stroke);
    }

    fn dashed_arrow(&self, seg: &Segment, stroke: Stroke) {
        self.dashed(seg, stroke);
        self.arrow_head(seg, stroke);
    }

    fn text(&self, at: Point, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.t.pos(at),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size * self.t.scale()),
            color,
        );
    }

    fn labels(&self, labels: &[Label]) {
        for label in labels {
            self.text(
                label.anchor,
                label.text,
                label_size(label.text),
                tone_color(label.tone),
            );
        }
    }

    fn crosshair(&self, ch: &Crosshair, color: Color32) {
        let stroke = self.stroke(1.0, color);
        self.dashed(&ch.horizontal, stroke);
        self.dashed(&ch.vertical, stroke);
        let center: Pos2 = self.t.pos(ch.center);
        self.painter
            .circle_stroke(center, self.t.length(ch.radius), stroke);
    }

    fn space_vector(&self, g: &SpaceVectorGeometry) {
        let axis = self.stroke(1.0, Color32::BLACK);
        self.dashed_arrow(&g.d_axis, axis);
        self.dashed_arrow(&g.q_axis, axis);

        self.arrow(&g.voltage, self.stroke(1.0, tone_color(Tone::Voltage)));
        self.arrow(&g.current, self.stroke(1.0, tone_color(Tone::Current)));
        self.crosshair(&g.reference_marker, tone_color(Tone::Current));
        self.arrow(&g.magnetizing, self.stroke(1.0, tone_color(Tone::Current)));

        self.labels(&g.labels);
    }

    fn hexagon(&self, g: &HexagonGeometry, error_marker: bool) {
        match &g.active {
            Some(active) => self.arrow(active, self.stroke(4.0, tone_color(Tone::Voltage))),
            None if error_marker && !g.selection.is_valid() => {
                let origin = g.spokes[0].start();
                self.painter.circle_stroke(
                    self.t.pos(origin),
                    self.t.length(12.0),
                    self.stroke(2.0, Color32::RED),
                );
                self.text(origin.offset(0.0, 24.0), "error", 12.0, Color32::RED);
            }
            None => {}
        }

        let web = self.stroke(1.0, Color32::BLACK);
        for seg in g.spokes.iter().chain(g.edges.iter()) {
            self.dashed(seg, web);
        }

        self.labels(&g.labels);
    }

    fn operating_point(&self, g: &OperatingPointGeometry) {
        let frame = self.stroke(1.0, Color32::BLACK);
        let r = &g.frame;
        let corners = [
            Segment::new(r.x0, r.y0, r.x1, r.y0),
            Segment::new(r.x1, r.y0, r.x1, r.y1),
            Segment::new(r.x1, r.y1, r.x0, r.y1),
            Segment::new(r.x0, r.y1, r.x0, r.y0),
        ];
        for side in &corners {
            self.dashed(side, frame);
        }
        self.dashed_arrow(&g.speed_axis, frame);
        self.dashed_arrow(&g.torque_axis, frame);

        let torque = self.stroke(2.0, tone_color(Tone::Torque));
        let speed = self.stroke(2.0, tone_color(Tone::Speed));
        self.dashed(&g.load_torque_level, torque);
        self.dashed(&g.speed_ref_level, speed);

        self.arrow(&g.operating_point, self.stroke(2.0, Color32::BLACK));
        self.dashed(&g.torque_projection, torque);
        self.dashed(&g.speed_projection, speed);

        self.labels(&g.labels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_distinct_roles() {
        assert_eq!(tone_color(Tone::Voltage), Color32::BLUE);
        assert_eq!(tone_color(Tone::Current), tone_color(Tone::Switched));
        assert_ne!(tone_color(Tone::Torque), tone_color(Tone::Speed));
        assert_eq!(tone_color(Tone::Neutral), Color32::BLACK);
    }

    #[test]
    fn quadrant_numerals_use_larger_font() {
        assert_eq!(label_size("III"), 16.0);
        assert_eq!(label_size("T_el"), 12.0);
    }
}
