//! Host screen component
//!
//! Renders the page that owns the export dialog's visibility: a single
//! "EXPORT CODE" trigger, a summary of the most recent export request, and
//! the help bar. Opening the dialog is expressed as an Action; the App owns
//! the modal stack.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_line;
use crate::model::ExportRequest;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TRIGGER_LABEL: &str = "[ EXPORT CODE ]";

/// Host screen with the export trigger
#[derive(Default)]
pub struct HomeComponent {
    /// Trigger rectangle recorded at draw time for mouse hit-testing
    button_area: Rect,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the host screen with the latest export state
    pub fn draw_home(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        last_export: Option<&ExportRequest>,
        status_message: Option<&str>,
    ) -> Result<()> {
        let [header_area, body_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        // Header
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Code Export",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  pick a format and options, then download",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, header_area);

        // Centered trigger button
        let button_row = Rect::new(
            body_area.x,
            body_area.y + body_area.height / 2,
            body_area.width,
            1.min(body_area.height),
        );
        let button_area = centered_line(button_row, TRIGGER_LABEL.len() as u16);
        frame.render_widget(
            Paragraph::new(Span::styled(
                TRIGGER_LABEL,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            button_area,
        );
        self.button_area = button_area;

        // Last requested export, shown under the trigger
        if let Some(request) = last_export {
            let summary_row = Rect::new(
                body_area.x,
                (button_row.y + 2).min(body_area.y + body_area.height.saturating_sub(1)),
                body_area.width,
                1.min(body_area.height),
            );
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("Last request: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(request.summary(), Style::default().fg(Color::Cyan)),
                ]))
                .alignment(Alignment::Center),
                summary_row,
            );
        }

        // Status line
        if let Some(message) = status_message {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Green),
                )),
                status_area,
            );
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " e/Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Export code  "),
            Span::styled(
                " q ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, help_area);

        Ok(())
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::Quit));
        }

        let action = match key.code {
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenExportDialog),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(None);
        }
        if self.button_area.is_empty() {
            return Ok(None);
        }

        let pos = Position::new(mouse.column, mouse.row);
        if self.button_area.contains(pos) {
            return Ok(Some(Action::OpenExportDialog));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_home(frame, area, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_trigger_keys_open_the_dialog() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('e'))).unwrap(),
            Some(Action::OpenExportDialog)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenExportDialog)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::OpenQuitDialog)
        );
    }

    #[test]
    fn test_ctrl_c_quits_immediately() {
        let mut home = HomeComponent::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(home.handle_key_event(ctrl_c).unwrap(), Some(Action::Quit));
    }

    #[test]
    fn test_clicking_the_trigger_opens_the_dialog() {
        let mut home = HomeComponent::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| home.draw(frame, frame.area()).unwrap())
            .unwrap();

        let x = home.button_area.x + home.button_area.width / 2;
        let y = home.button_area.y;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            home.handle_mouse_event(click).unwrap(),
            Some(Action::OpenExportDialog)
        );

        let elsewhere = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(home.handle_mouse_event(elsewhere).unwrap(), None);
    }
}
