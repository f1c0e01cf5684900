pub mod canvas;
pub mod cursor_view;
pub mod diagram_view;
pub mod timeline_view;

pub use cursor_view::CursorView;
pub use diagram_view::DiagramView;
pub use timeline_view::TimelineView;
