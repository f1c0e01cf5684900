//! Viewer configuration.
//!
//! Every section has defaults, so an empty file (or no file at all) yields
//! the stock setup: `SimulinkOutput.xlsx`, sheet `dati5`, a 2 s run shown on
//! a 1300 x 500 canvas.

use mv_data::ColumnMap;
use mv_geometry::{DiagramLayout, DiagramScales};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data: DataConfig,
    pub canvas: CanvasConfig,
    pub layout: LayoutConfig,
    pub scales: DiagramScales,
    pub cursor: CursorConfig,
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Spreadsheet path, relative paths resolve against the config file
    pub path: PathBuf,
    /// Sheet holding the samples (ignored for CSV)
    pub sheet: String,
    /// Simulated time covered by the whole table
    pub total_duration_s: f64,
    pub columns: ColumnMap,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("SimulinkOutput.xlsx"),
            sheet: "dati5".to_string(),
            total_duration_s: 2.0,
            columns: ColumnMap::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1300.0,
            height: 500.0,
            title: "Induction machine FOC with SVPWM.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance of the diagram centers from the top
    pub drop: f64,
    /// Horizontal distance between diagram centers
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            drop: 270.0,
            spacing: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Range divisors of the four cursor inputs, coarse to fine
    pub zooms: [u32; 4],
    /// Pause between redraws
    pub frame_delay_ms: u64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            zooms: mv_core::DEFAULT_ZOOMS,
            frame_delay_ms: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Print the sample index and selected hexagon direction every frame
    pub console: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { console: true }
    }
}

impl ViewerConfig {
    pub fn diagram_layout(&self) -> DiagramLayout {
        DiagramLayout::centered(self.canvas.width, self.layout.drop, self.layout.spacing)
    }

    /// Resolve a relative data path against `base_dir`.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if self.data.path.is_relative() {
            self.data.path = base_dir.join(&self.data.path);
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.data.total_duration_s.is_finite() && self.data.total_duration_s > 0.0) {
            return Err(AppError::Config(format!(
                "data.total_duration_s must be > 0, got {}",
                self.data.total_duration_s
            )));
        }
        if self.data.sheet.trim().is_empty() {
            return Err(AppError::Config("data.sheet must not be empty".to_string()));
        }
        if self.cursor.zooms.contains(&0) {
            return Err(AppError::Config(
                "cursor.zooms must all be > 0".to_string(),
            ));
        }
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(AppError::Config(
                "canvas width and height must be > 0".to_string(),
            ));
        }

        let s = &self.scales;
        let scales = [
            ("voltage", s.voltage),
            ("current", s.current),
            ("hexagon", s.hexagon),
            ("quadrant_half_width", s.quadrant_half_width),
            ("quadrant_half_height", s.quadrant_half_height),
            ("speed_factor", s.speed_factor),
            ("torque_factor", s.torque_factor),
        ];
        for (name, value) in scales {
            if !value.is_finite() {
                return Err(AppError::Config(format!(
                    "scales.{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Load a config file and resolve its data path next to it.
pub fn load_config(path: &Path) -> AppResult<ViewerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut config: ViewerConfig = serde_yaml::from_str(&content)?;
    if let Some(parent) = path.parent() {
        config.resolve_paths(parent);
    }
    config.validate()?;

    tracing::debug!(path = %path.display(), "loaded viewer config");
    Ok(config)
}

/// Load `path` when given, otherwise use the built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> AppResult<ViewerConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ViewerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ViewerConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "data:\n  sheet: run2\ncursor:\n  frame_delay_ms: 16\n";
        let config: ViewerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data.sheet, "run2");
        assert_eq!(config.data.total_duration_s, 2.0);
        assert_eq!(config.cursor.frame_delay_ms, 16);
        assert_eq!(config.cursor.zooms, [1, 10, 500, 2000]);
        assert_eq!(config.data.columns.hb3, 19);
    }

    #[test]
    fn zero_zoom_is_rejected() {
        let mut config = ViewerConfig::default();
        config.cursor.zooms = [1, 0, 500, 2000];
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        let mut config = ViewerConfig::default();
        config.data.total_duration_s = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_data_path_resolves_against_config_dir() {
        let mut config = ViewerConfig::default();
        config.resolve_paths(Path::new("/runs/motor"));
        assert_eq!(config.data.path, PathBuf::from("/runs/motor/SimulinkOutput.xlsx"));
    }

    #[test]
    fn layout_follows_canvas() {
        let config = ViewerConfig::default();
        assert_eq!(config.diagram_layout(), DiagramLayout::default());
    }

    #[test]
    fn loading_leaves_config_file_untouched() {
        let dir = std::env::temp_dir().join("mv_app_config_readonly");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("viewer.yaml");
        let yaml = "data:\n  sheet: dati5\n";
        std::fs::write(&path, yaml).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.data.path, dir.join("SimulinkOutput.xlsx"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), yaml);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    }
}
