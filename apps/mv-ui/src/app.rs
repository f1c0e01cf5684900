use crate::views::{CursorView, DiagramView, TimelineView};
use egui_file_dialog::{DialogMode, FileDialog};
use mv_app::{Session, ViewerConfig};
use std::path::PathBuf;
use std::time::Duration;

pub struct MotorVizApp {
    config: ViewerConfig,
    session: Option<Session>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    cursor_view: CursorView,
    diagram_view: DiagramView,
    timeline_view: TimelineView,
    show_timeline: bool,
    last_error: Option<String>,
}

impl MotorVizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ViewerConfig, session: Session) -> Self {
        let last_directory = config.data.path.parent().map(|p| p.to_path_buf());
        Self {
            config,
            session: Some(session),
            file_dialog: FileDialog::new(),
            last_directory,
            cursor_view: CursorView::default(),
            diagram_view: DiagramView::default(),
            timeline_view: TimelineView::default(),
            show_timeline: true,
            last_error: None,
        }
    }

    fn open_table(&mut self, path: PathBuf) {
        let mut config = self.config.clone();
        config.data.path = path;

        match Session::open(&config) {
            Ok(session) => {
                if let Some(parent) = config.data.path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                tracing::info!(
                    path = %config.data.path.display(),
                    samples = session.table().len(),
                    "opened sample table"
                );
                self.cursor_view.fit_to(session.cursor());
                self.timeline_view.invalidate();
                self.session = Some(session);
                self.config = config;
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to open sample table");
                self.session = None;
                self.last_error = Some(format!("Failed to load table: {}", e));
            }
        }
    }

    fn source_label(&self) -> String {
        match &self.session {
            Some(session) => {
                let table = session.table();
                let name = table
                    .source()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match table.sheet() {
                    Some(sheet) => format!("{} [{}], {} samples", name, sheet, table.len()),
                    None => format!("{}, {} samples", name, table.len()),
                }
            }
            None => "No table loaded".to_string(),
        }
    }
}

impl eframe::App for MotorVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }

                ui.separator();
                ui.label(self.source_label());

                ui.separator();
                ui.checkbox(&mut self.show_timeline, "Timeline");
                ui.checkbox(&mut self.config.trace.console, "Console trace");
                ui.checkbox(&mut self.diagram_view.show_error_marker, "Sector errors");
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_table(path.to_path_buf());
        }

        let Some(session) = &self.session else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::RED,
                    self.last_error.as_deref().unwrap_or("No table loaded"),
                );
            });
            return;
        };

        egui::TopBottomPanel::bottom("cursor").show(ctx, |ui| {
            self.cursor_view.show(ui, session.cursor());
        });

        let frame = match session.frame(self.cursor_view.inputs()) {
            Ok(frame) => frame,
            Err(e) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.colored_label(egui::Color32::RED, format!("Frame error: {}", e));
                });
                return;
            }
        };

        if self.config.trace.console {
            println!("{}", frame.trace());
        }

        if self.show_timeline {
            egui::TopBottomPanel::bottom("timeline")
                .resizable(true)
                .default_height(180.0)
                .show(ctx, |ui| {
                    self.timeline_view.show(ui, session, frame.row.time_s);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.diagram_view.show(ui, &frame, &self.config.canvas);
        });

        ctx.request_repaint_after(Duration::from_millis(self.config.cursor.frame_delay_ms));
    }
}
