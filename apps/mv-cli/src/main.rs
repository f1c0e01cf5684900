use clap::{Args, Parser, Subcommand};
use mv_app::{AppError, AppResult, Session, ViewerConfig, load_config_or_default};
use mv_core::CursorInputs;
use mv_geometry::SECTOR_TABLE;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mv-cli")]
#[command(about = "motorviz CLI - inspect drive sample tables and diagram frames", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Viewer config YAML (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Spreadsheet to load instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,
    /// Sheet name inside the spreadsheet
    #[arg(short, long, global = true)]
    sheet: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the sample table
    Inspect,
    /// Compose a single frame
    Frame {
        /// Sample index to show
        #[arg(long, conflicts_with = "inputs")]
        index: Option<usize>,
        /// Four cursor inputs, coarse to fine
        #[arg(long, num_args = 4, value_names = ["X1", "X10", "X500", "X2000"], allow_negative_numbers = true)]
        inputs: Option<Vec<i64>>,
        /// Print the full frame geometry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the per-frame trace for a range of samples
    Trace {
        /// First sample index
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Last sample index (inclusive), defaults to the last sample
        #[arg(long)]
        end: Option<usize>,
        /// Index increment
        #[arg(long, default_value_t = 1)]
        step: usize,
    },
    /// List the hexagon sector table
    Sectors,
    /// Print the effective viewer config as YAML
    Config,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sectors => cmd_sectors(),
        Commands::Config => cmd_config(&effective_config(&cli.source)?),
        Commands::Inspect => cmd_inspect(&open_session(&cli.source)?),
        Commands::Frame {
            index,
            inputs,
            json,
        } => cmd_frame(&open_session(&cli.source)?, index, inputs, json),
        Commands::Trace { start, end, step } => {
            cmd_trace(&open_session(&cli.source)?, start, end, step)
        }
    }
}

fn effective_config(args: &SourceArgs) -> AppResult<ViewerConfig> {
    let mut config = load_config_or_default(args.config.as_deref())?;
    if let Some(file) = &args.file {
        config.data.path = file.clone();
    }
    if let Some(sheet) = &args.sheet {
        config.data.sheet = sheet.clone();
    }
    config.validate()?;
    Ok(config)
}

fn open_session(args: &SourceArgs) -> AppResult<Session> {
    let config = effective_config(args)?;
    tracing::info!(path = %config.data.path.display(), "opening sample table");
    Session::open(&config)
}

fn cmd_sectors() -> AppResult<()> {
    println!("hb1 hb2 hb3  vector");
    for (levels, vector) in SECTOR_TABLE {
        println!(
            " {}   {}   {}   {:?}",
            levels[0], levels[1], levels[2], vector
        );
    }
    Ok(())
}

fn cmd_config(config: &ViewerConfig) -> AppResult<()> {
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

fn cmd_inspect(session: &Session) -> AppResult<()> {
    let summary = session.summary();
    println!("Source: {}", summary.source);
    if let Some(sheet) = &summary.sheet {
        println!("Sheet: {}", sheet);
    }
    println!("Samples: {}", summary.sample_count);
    println!("Simulated duration: {:.3} s", summary.total_duration_s);
    println!(
        "Sample time column: {:.6} .. {:.6} s",
        summary.time_range.0, summary.time_range.1
    );
    println!(
        "Cursor input bounds: {}",
        summary
            .cursor_bounds
            .iter()
            .zip(session.cursor().zooms())
            .map(|(bound, zoom)| format!("x{zoom}: 0..={bound}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    if summary.invalid_switch_rows == 0 {
        println!("✓ All switch states select a hexagon sector");
    } else {
        println!(
            "✗ {} row(s) have switch states outside the sector table",
            summary.invalid_switch_rows
        );
    }
    Ok(())
}

fn cmd_frame(
    session: &Session,
    index: Option<usize>,
    inputs: Option<Vec<i64>>,
    json: bool,
) -> AppResult<()> {
    let frame = match (index, inputs) {
        (Some(index), _) => session.frame_at(index)?,
        (None, Some(values)) => {
            let values: [i64; 4] = values.try_into().map_err(|v: Vec<i64>| {
                AppError::InvalidInput(format!("expected 4 cursor inputs, got {}", v.len()))
            })?;
            session.frame(session.cursor().clamp_inputs(CursorInputs::new(values)))?
        }
        (None, None) => session.frame(CursorInputs::default())?,
    };

    if json {
        let out = serde_json::to_string_pretty(&frame)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize frame: {}", e)))?;
        println!("{}", out);
    } else {
        println!("Time: {:.3} ms", frame.position.time_ms);
        println!("{}", frame.trace());
    }
    Ok(())
}

fn cmd_trace(session: &Session, start: usize, end: Option<usize>, step: usize) -> AppResult<()> {
    if step == 0 {
        return Err(AppError::InvalidInput("--step must be > 0".to_string()));
    }
    let last = session.table().len() - 1;
    let end = end.unwrap_or(last).min(last);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for index in (start..=end).step_by(step) {
        let frame = session.frame_at(index)?;
        let written = writeln!(out, "{:.3} ms  {}", frame.position.time_ms, frame.trace());
        if written.is_err() {
            // stdout closed (e.g. piped into `head`)
            break;
        }
    }
    Ok(())
}
