//! Shared application service layer for motorviz.
//!
//! Both the CLI and the GUI go through this crate: it loads the viewer
//! configuration, opens a sample table as a [`Session`], and composes one
//! [`Frame`] of diagram geometry per cursor position.

pub mod config;
pub mod error;
pub mod frame;
pub mod session;

// Re-export key types for convenience
pub use config::{
    CanvasConfig, CursorConfig, DataConfig, LayoutConfig, TraceConfig, ViewerConfig, load_config,
    load_config_or_default,
};
pub use error::{AppError, AppResult};
pub use frame::{DirectionTrace, Frame, FrameTrace};
pub use session::{Session, TableSummary};
