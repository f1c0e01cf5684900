#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::MotorVizApp;
use clap::Parser;
use mv_app::{AppResult, Session, ViewerConfig, load_config_or_default};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mv-ui")]
#[command(about = "motorviz - animated induction motor drive diagrams", long_about = None)]
struct Args {
    /// Viewer config YAML (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Spreadsheet to load instead of the configured one
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Sheet name inside the spreadsheet
    #[arg(short, long)]
    sheet: Option<String>,
}

fn startup(args: &Args) -> AppResult<(ViewerConfig, Session)> {
    let mut config = load_config_or_default(args.config.as_deref())?;
    if let Some(file) = &args.file {
        config.data.path = file.clone();
    }
    if let Some(sheet) = &args.sheet {
        config.data.sheet = sheet.clone();
    }
    let session = Session::open(&config)?;
    Ok((config, session))
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let (config, session) = match startup(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "failed to load sample table");
            eprintln!("mv-ui: {}", e);
            std::process::exit(1);
        }
    };

    let width = config.canvas.width as f32 + 40.0;
    let height = config.canvas.height as f32 + 260.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title("motorviz"),
        ..Default::default()
    };

    eframe::run_native(
        "motorviz",
        options,
        Box::new(|cc| Ok(Box::new(MotorVizApp::new(cc, config, session)))),
    )
}
