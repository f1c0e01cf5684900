use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, VLine};
use mv_app::Session;

/// Points kept per plotted series; the chart is rebuilt every repaint.
const MAX_POINTS: usize = 2000;

/// Strip chart of speed and torque over the whole run with the cursor marked.
#[derive(Default)]
pub struct TimelineView {
    series: Vec<(&'static str, Vec<[f64; 2]>)>,
}

impl TimelineView {
    /// Drop cached series; call after a different table was opened.
    pub fn invalidate(&mut self) {
        self.series.clear();
    }

    fn refresh(&mut self, session: &Session) {
        if !self.series.is_empty() {
            return;
        }
        let table = session.table();
        self.series = vec![
            ("ω_r", decimate(&table.series(|r| r.w_r), MAX_POINTS)),
            ("ω_r*", decimate(&table.series(|r| r.w_r_ref), MAX_POINTS)),
            ("T_el", decimate(&table.series(|r| r.t_el), MAX_POINTS)),
            ("T_load", decimate(&table.series(|r| r.t_load), MAX_POINTS)),
        ];
    }

    /// `cursor_time_s` is the sheet's own time column at the cursor row.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &Session, cursor_time_s: f64) {
        self.refresh(session);

        Plot::new("timeline")
            .height(ui.available_height())
            .legend(Legend::default().position(Corner::LeftTop))
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (name, points) in &self.series {
                    plot_ui.line(Line::new(PlotPoints::from(points.clone())).name(*name));
                }
                plot_ui.vline(VLine::new(cursor_time_s).name("cursor"));
            });
    }
}

/// Reduce a series to at most `max_points` points.
///
/// Interior points are bucketed; each bucket keeps its minimum and maximum in
/// time order, so peaks survive. The first and last points are always kept.
fn decimate(points: &[[f64; 2]], max_points: usize) -> Vec<[f64; 2]> {
    if points.len() <= max_points || max_points < 4 {
        return points.to_vec();
    }
    let inner = &points[1..points.len() - 1];
    let buckets = (max_points - 2) / 2;
    let size = inner.len().div_ceil(buckets);

    let mut out = Vec::with_capacity(max_points);
    out.push(points[0]);
    for chunk in inner.chunks(size) {
        let (mut lo, mut hi) = (0, 0);
        for (i, p) in chunk.iter().enumerate() {
            if p[1] < chunk[lo][1] {
                lo = i;
            }
            if p[1] > chunk[hi][1] {
                hi = i;
            }
        }
        out.push(chunk[lo.min(hi)]);
        if lo != hi {
            out.push(chunk[lo.max(hi)]);
        }
    }
    out.push(points[points.len() - 1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<[f64; 2]> {
        (0..n).map(|i| [i as f64 * 1e-4, (i as f64 * 0.01).sin()]).collect()
    }

    #[test]
    fn short_series_is_unchanged() {
        let points = ramp(500);
        assert_eq!(decimate(&points, MAX_POINTS), points);
    }

    #[test]
    fn long_series_is_capped() {
        let mut points = ramp(100_000);
        points[54_321][1] = 7.5;
        let out = decimate(&points, MAX_POINTS);

        assert!(out.len() <= MAX_POINTS);
        assert_eq!(out.first(), points.first());
        assert_eq!(out.last(), points.last());
        assert!(out.contains(&points[54_321]));
        assert!(out.windows(2).all(|w| w[0][0] < w[1][0]));
    }
}
