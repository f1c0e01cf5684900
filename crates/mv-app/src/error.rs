//! Error types for the mv-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {}", .path.display())]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] mv_data::DataError),

    #[error("Cursor error: {0}")]
    Core(#[from] mv_core::CoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for mv-app operations.
pub type AppResult<T> = Result<T, AppError>;
