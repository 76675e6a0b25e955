//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. The modal stack owns dialog visibility: the export dialog is
//! "open" exactly while `Modal::Export` is on the stack, and the App is the
//! parent that flips that flag in response to open/close actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{ExportDialog, HomeComponent, QuitDialog};
use crate::model::{ExportRequest, Modal, ModalStack};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Main application state - coordinates between components
pub struct App {
    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// The most recently confirmed export intent
    pub last_export: Option<ExportRequest>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub export_dialog: ExportDialog,
    pub quit_dialog: QuitDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        App {
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            last_export: None,
            home: HomeComponent::new(),
            export_dialog: ExportDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    fn confirm_export(&mut self) -> Result<()> {
        let request = self.export_dialog.request();
        tracing::info!(request = %serde_json::to_string(&request)?, "export requested");
        self.status_message = Some(format!("Export requested: {}", request.summary()));
        self.last_export = Some(request);
        self.modals.pop();
        Ok(())
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::Export) => self.export_dialog.handle_key_event(key),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::Export) => self.export_dialog.handle_mouse_event(mouse),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_mouse_event(mouse),
            None => self.home.handle_mouse_event(mouse),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::Quit => {
                self.should_quit = true;
            }
            Action::OpenExportDialog => {
                // Fresh defaults on every open; nothing persists across reopen
                self.export_dialog.reset();
                self.status_message = None;
                self.modals.push(Modal::Export);
                tracing::debug!("export dialog opened");
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
                tracing::debug!("modal dismissed");
            }
            Action::ConfirmModal => match self.modals.top() {
                Some(Modal::QuitConfirm) => {
                    self.should_quit = true;
                }
                Some(Modal::Export) => {
                    self.confirm_export()?;
                }
                None => {}
            },
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.home.draw_home(
            frame,
            area,
            self.last_export.as_ref(),
            self.status_message.as_deref(),
        )?;

        // Modal overlay, if any
        match self.modals.top() {
            Some(Modal::Export) => self.export_dialog.draw(frame, area)?,
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExportFormat, ExportOptions};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_open_dialog_pushes_modal() {
        let mut app = App::new();
        assert!(app.modals.is_empty());

        let action = app.handle_key_event(key(KeyCode::Char('e'))).unwrap();
        app.update(action.unwrap()).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Export));
    }

    #[test]
    fn test_dialog_content_absent_until_opened() {
        let mut app = App::new();
        let closed = render(&mut app);
        assert!(!closed.contains("Download HTML & CSS Project"));

        app.update(Action::OpenExportDialog).unwrap();
        let open = render(&mut app);
        assert!(open.contains("Download HTML & CSS Project"));
        assert!(open.contains("Include custom code"));
    }

    #[test]
    fn test_close_pops_without_recording_a_request() {
        let mut app = App::new();
        app.update(Action::OpenExportDialog).unwrap();
        app.update(Action::CloseModal).unwrap();

        assert!(app.modals.is_empty());
        assert!(app.last_export.is_none());
    }

    #[test]
    fn test_confirm_records_the_chosen_intent() {
        let mut app = App::new();
        app.update(Action::OpenExportDialog).unwrap();

        // Switch to the framework tab and disable its first option
        app.handle_key_event(key(KeyCode::Char('2'))).unwrap();
        app.handle_key_event(key(KeyCode::Tab)).unwrap();
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();

        let action = app.handle_key_event(key(KeyCode::Enter)).unwrap();
        app.update(action.unwrap()).unwrap();

        assert!(app.modals.is_empty());
        let request = app.last_export.expect("confirm should record a request");
        assert_eq!(request.format, ExportFormat::FrameworkProject);
        match request.options {
            ExportOptions::Framework(opts) => {
                assert!(!opts.use_app_directory);
                assert!(opts.include_assets_locally);
                assert!(opts.include_custom_code);
            }
            _ => panic!("expected framework options"),
        }
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_reopen_starts_from_defaults() {
        let mut app = App::new();
        app.update(Action::OpenExportDialog).unwrap();
        app.handle_key_event(key(KeyCode::Tab)).unwrap();
        app.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(!app.export_dialog.html_options.include_assets);
        app.update(Action::CloseModal).unwrap();

        app.update(Action::OpenExportDialog).unwrap();
        assert!(app.export_dialog.html_options.include_assets);
        assert_eq!(app.export_dialog.format, ExportFormat::HtmlCss);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = App::new();
        let action = app.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        app.update(action.unwrap()).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        let action = app.handle_key_event(key(KeyCode::Char('y'))).unwrap();
        app.update(action.unwrap()).unwrap();
        assert!(app.should_quit);
    }
}
