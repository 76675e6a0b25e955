//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod export_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;

pub use export_dialog::ExportDialog;
pub use home::HomeComponent;
pub use layout::{centered_line, centered_popup};
pub use quit_dialog::QuitDialog;
