//! Frame composition through the service layer.

use mv_app::{AppError, DirectionTrace, Session, ViewerConfig, load_config};
use mv_core::{CursorInputs, SampleRow};
use mv_data::SampleTable;
use mv_geometry::HexVector;
use std::io::Write;
use std::sync::{Arc, Mutex};

fn synthetic_rows(n: usize) -> Vec<SampleRow> {
    (0..n)
        .map(|i| {
            let switches = match i % 4 {
                0 => [0.0, 1.0, 1.0],
                1 => [1.0, 0.0, 0.0],
                2 => [1.0, 1.0, 1.0],
                _ => [0.0, 0.5, 1.0],
            };
            SampleRow {
                time_s: i as f64 * 0.002,
                w_r: i as f64 / n as f64,
                t_el: 0.3,
                theta: i as f64 * 0.01,
                hb1: switches[0],
                hb2: switches[1],
                hb3: switches[2],
                ..SampleRow::default()
            }
        })
        .collect()
}

fn session(n: usize) -> Session {
    let table = SampleTable::from_rows(synthetic_rows(n)).unwrap();
    Session::from_table(table, &ViewerConfig::default()).unwrap()
}

#[test]
fn cursor_inputs_select_rows() {
    let session = session(1000);

    let first = session.frame(CursorInputs::default()).unwrap();
    assert_eq!(first.position.index, 0);
    assert_eq!(first.position.time_ms, 0.0);

    let last = session.frame(CursorInputs::new([10_000, 0, 0, 0])).unwrap();
    assert_eq!(last.position.index, 999);
    assert_eq!(last.row, session.table().rows()[999]);
}

#[test]
fn elapsed_time_uses_configured_duration() {
    let session = session(1000);
    let frame = session.frame_at(500).unwrap();
    assert!((frame.position.time_ms - 1000.0).abs() < 1e-9);
}

#[test]
fn trace_reports_direction_or_error() {
    let session = session(8);

    let v1 = session.frame_at(0).unwrap();
    assert_eq!(v1.selection().vector(), Ok(HexVector::V1));
    assert!(matches!(v1.trace().direction, DirectionTrace::Direction { .. }));

    let zero = session.frame_at(2).unwrap();
    assert_eq!(
        zero.trace().direction,
        DirectionTrace::Direction { x: 0.0, y: 0.0 }
    );

    let invalid = session.frame_at(3).unwrap();
    assert_eq!(invalid.trace().direction, DirectionTrace::Error);
    assert_eq!(invalid.trace().to_string(), "3 error");
    assert!(invalid.diagrams.hexagon.active.is_none());
}

#[test]
fn summary_counts_invalid_switch_rows() {
    let session = session(8);
    let summary = session.summary();
    assert_eq!(summary.sample_count, 8);
    assert_eq!(summary.invalid_switch_rows, 2);
    assert_eq!(session.invalid_switch_rows(), vec![3, 7]);
    assert_eq!(summary.cursor_bounds, [8, 0, 0, 0]);
}

#[test]
fn frames_serialize_to_json() {
    let frame = session(4).frame_at(1).unwrap();
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["position"]["index"], 1);
    assert!(json["diagrams"]["hexagon"]["spokes"].is_array());
}

#[test]
fn missing_data_file_fails_to_open() {
    let mut config = ViewerConfig::default();
    config.data.path = std::env::temp_dir().join("mv_app_test_missing.xlsx");
    let err = Session::open(&config).unwrap_err();
    assert!(matches!(err, AppError::Data(_)));
}

#[test]
fn config_file_points_at_csv_next_to_it() {
    let dir = std::env::temp_dir().join("mv_app_test_config");
    std::fs::create_dir_all(&dir).unwrap();

    let mut csv = String::new();
    for i in 0..10 {
        let cells: Vec<String> = (0..20)
            .map(|c| match c {
                17..=19 => "0".to_string(),
                _ => format!("{}", i as f64 + c as f64 * 0.1),
            })
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }
    std::fs::write(dir.join("samples.csv"), csv).unwrap();

    let config_path = dir.join("viewer.yaml");
    std::fs::write(
        &config_path,
        "data:\n  path: samples.csv\n  total_duration_s: 0.5\ntrace:\n  console: false\n",
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert!(!config.trace.console);

    let session = Session::open(&config).unwrap();
    assert_eq!(session.table().len(), 10);
    let frame = session.frame_at(5).unwrap();
    assert!((frame.position.time_ms - 250.0).abs() < 1e-9);
    assert_eq!(frame.selection().vector(), Ok(HexVector::Zero));
}

/// In-memory log sink shared with the fmt subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn frame_composition_logs_at_debug_level() {
    let session = session(8);
    let buffer = LogBuffer::default();
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        session.frame_at(2).unwrap();
    });

    let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("DEBUG"), "{logged}");
    assert!(logged.contains("index=2"), "{logged}");
}
