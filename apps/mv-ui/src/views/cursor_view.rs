use mv_core::{CursorInputs, TimeCursor};

/// The four zoom sliders that drive the time cursor.
#[derive(Default)]
pub struct CursorView {
    values: [i64; 4],
}

impl CursorView {
    pub fn inputs(&self) -> CursorInputs {
        CursorInputs::new(self.values)
    }

    /// Re-clamp after the table (and so the slider bounds) changed.
    pub fn fit_to(&mut self, cursor: &TimeCursor) {
        self.values = cursor.clamp_inputs(self.inputs()).0;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, cursor: &TimeCursor) {
        let bounds = cursor.bounds();
        ui.horizontal_wrapped(|ui| {
            for ((value, bound), zoom) in self.values.iter_mut().zip(bounds).zip(cursor.zooms()) {
                ui.add(egui::Slider::new(value, 0..=bound).text(format!("zoom x{}", zoom)));
            }
            if ui.button("Reset").clicked() {
                self.values = [0; 4];
            }
        });
    }
}
