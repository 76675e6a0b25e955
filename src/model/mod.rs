//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `export` - Export formats, option sets, and the confirmed request
//! - `modal` - Modal overlay management

pub mod export;
pub mod modal;

// Re-export commonly used types
pub use export::{
    ExportFormat, ExportOptions, ExportRequest, FrameworkExportOptions, HtmlExportOptions,
};
pub use modal::{Modal, ModalStack};
