//! Export options dialog component
//!
//! Two-tab dialog mirroring the "Code Export" popup:
//! 1. Format picker (HTML & CSS vs. Next.js project)
//! 2. Per-format option toggles
//! 3. Footer download action
//!
//! Both option sets live in this struct for the whole time the dialog is
//! open, so switching tabs never resets the other tab's choices. `reset()`
//! runs on every open, restoring the defaults.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_line, centered_popup};
use crate::model::{ExportFormat, ExportOptions, ExportRequest, FrameworkExportOptions, HtmlExportOptions};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 14;

/// Focus section in the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportDialogFocus {
    #[default]
    Format,
    Options,
}

/// Export options dialog
pub struct ExportDialog {
    /// Active format tab
    pub format: ExportFormat,
    /// Options for the HTML & CSS tab
    pub html_options: HtmlExportOptions,
    /// Options for the framework tab
    pub framework_options: FrameworkExportOptions,
    /// Current focus section
    pub focus: ExportDialogFocus,
    /// Which option row is focused within the active tab
    pub option_index: usize,

    // Screen rectangles recorded at draw time for mouse hit-testing.
    // All zero-sized until the first draw; mouse input is ignored then.
    panel_area: Rect,
    tab_areas: [Rect; 2],
    option_areas: [Rect; 3],
    footer_area: Rect,
}

impl Default for ExportDialog {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            html_options: HtmlExportOptions::default(),
            framework_options: FrameworkExportOptions::default(),
            focus: ExportDialogFocus::default(),
            option_index: 0,
            panel_area: Rect::default(),
            tab_areas: [Rect::default(); 2],
            option_areas: [Rect::default(); 3],
            footer_area: Rect::default(),
        }
    }
}

impl ExportDialog {
    /// Reset dialog state for a new invocation
    ///
    /// Every open starts from defaults; nothing persists across close/reopen.
    pub fn reset(&mut self) {
        self.format = ExportFormat::default();
        self.html_options = HtmlExportOptions::default();
        self.framework_options = FrameworkExportOptions::default();
        self.focus = ExportDialogFocus::default();
        self.option_index = 0;
    }

    /// Number of option rows for the active tab
    pub fn option_count(&self) -> usize {
        match self.format {
            ExportFormat::HtmlCss => HtmlExportOptions::LABELS.len(),
            ExportFormat::FrameworkProject => FrameworkExportOptions::LABELS.len(),
        }
    }

    fn option_labels(&self) -> &'static [&'static str] {
        match self.format {
            ExportFormat::HtmlCss => &HtmlExportOptions::LABELS,
            ExportFormat::FrameworkProject => &FrameworkExportOptions::LABELS,
        }
    }

    fn option_flag(&self, index: usize) -> bool {
        match self.format {
            ExportFormat::HtmlCss => self.html_options.flag(index),
            ExportFormat::FrameworkProject => self.framework_options.flag(index),
        }
    }

    /// Flip one option of the active tab; other options are untouched
    pub fn toggle_option(&mut self, index: usize) {
        match self.format {
            ExportFormat::HtmlCss => self.html_options.toggle(index),
            ExportFormat::FrameworkProject => self.framework_options.toggle(index),
        }
    }

    /// Switch the active tab, clamping the focused row to the new option list
    pub fn select_format(&mut self, format: ExportFormat) {
        self.format = format;
        let max = self.option_count().saturating_sub(1);
        if self.option_index > max {
            self.option_index = max;
        }
    }

    /// The confirmed `(format, options)` intent
    pub fn request(&self) -> ExportRequest {
        let options = match self.format {
            ExportFormat::HtmlCss => ExportOptions::HtmlCss(self.html_options),
            ExportFormat::FrameworkProject => ExportOptions::Framework(self.framework_options),
        };
        ExportRequest {
            format: self.format,
            options,
        }
    }

    fn other_format(&self) -> ExportFormat {
        match self.format {
            ExportFormat::HtmlCss => ExportFormat::FrameworkProject,
            ExportFormat::FrameworkProject => ExportFormat::HtmlCss,
        }
    }

    fn render_tabs(&mut self, frame: &mut Frame, area: Rect) {
        let halves: [Rect; 2] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        for (i, format) in ExportFormat::all().into_iter().enumerate() {
            let is_active = format == self.format;
            let marker = if is_active && self.focus == ExportDialogFocus::Format {
                "▶ "
            } else if is_active {
                "● "
            } else {
                "  "
            };
            let style = if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", format.shortcut()),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}{}", marker, format.tab_title()), style),
            ]);

            frame.render_widget(
                Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
                halves[i],
            );
            self.tab_areas[i] = halves[i];
        }
    }

    fn render_option_row(&self, frame: &mut Frame, area: Rect, index: usize) {
        let focused = self.focus == ExportDialogFocus::Options && self.option_index == index;
        let prefix = if focused { "▶ " } else { "  " };
        let checked = self.option_flag(index);
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let checkbox_style = if checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(prefix),
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            Span::styled(self.option_labels()[index], label_style),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for ExportDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    ExportDialogFocus::Format => ExportDialogFocus::Options,
                    ExportDialogFocus::Options => ExportDialogFocus::Format,
                };
                None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.select_format(self.other_format());
                None
            }
            KeyCode::Char('1') => {
                self.select_format(ExportFormat::HtmlCss);
                None
            }
            KeyCode::Char('2') => {
                self.select_format(ExportFormat::FrameworkProject);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                match self.focus {
                    ExportDialogFocus::Format => {
                        self.focus = ExportDialogFocus::Options;
                        self.option_index = 0;
                    }
                    ExportDialogFocus::Options => {
                        if self.option_index + 1 < self.option_count() {
                            self.option_index += 1;
                        }
                    }
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.focus == ExportDialogFocus::Options {
                    if self.option_index > 0 {
                        self.option_index -= 1;
                    } else {
                        self.focus = ExportDialogFocus::Format;
                    }
                }
                None
            }
            KeyCode::Char(' ') => {
                if self.focus == ExportDialogFocus::Options {
                    self.toggle_option(self.option_index);
                }
                None
            }
            KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(None);
        }
        // Not drawn yet, so there is no overlay to click
        if self.panel_area.is_empty() {
            return Ok(None);
        }

        let pos = Position::new(mouse.column, mouse.row);

        // Overlay click (outside the panel) dismisses
        if !self.panel_area.contains(pos) {
            return Ok(Some(Action::CloseModal));
        }

        for (i, tab_area) in self.tab_areas.iter().enumerate() {
            if tab_area.contains(pos) {
                self.focus = ExportDialogFocus::Format;
                self.select_format(ExportFormat::all()[i]);
                return Ok(None);
            }
        }

        for index in 0..self.option_count() {
            if self.option_areas[index].contains(pos) {
                self.focus = ExportDialogFocus::Options;
                self.option_index = index;
                self.toggle_option(index);
                return Ok(None);
            }
        }

        if self.footer_area.contains(pos) {
            return Ok(Some(Action::ConfirmModal));
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
        self.panel_area = popup_area;

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Code Export ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows: [Rect; 12] = Layout::vertical([Constraint::Length(1); 12]).areas(inner);

        // Subtitle
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Manage how you download your website's code.",
                Style::default().fg(Color::DarkGray),
            ))),
            rows[0],
        );

        // Tab picker
        self.render_tabs(frame, rows[2]);

        // Section header with badge
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    self.format.export_label(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled("[Zipped]", Style::default().fg(Color::DarkGray)),
            ])),
            rows[4],
        );

        // Option list for the active tab
        self.option_areas = [Rect::default(); 3];
        for index in 0..self.option_count() {
            let row = rows[6 + index];
            self.render_option_row(frame, row, index);
            self.option_areas[index] = row;
        }

        // Footer download button
        let label = format!("[ {} ]", self.format.download_label());
        let button_area = centered_line(rows[10], label.len() as u16);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))),
            button_area,
        );
        self.footer_area = button_area;

        // Help bar
        let help = Line::from(vec![
            Span::styled(
                " ←/→ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Format  "),
            Span::styled(
                " ↑/↓ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Option  "),
            Span::styled(
                " Space ",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Toggle  "),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Download  "),
            Span::styled(
                " Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Close"),
        ]);
        frame.render_widget(
            Paragraph::new(help).alignment(ratatui::layout::Alignment::Center),
            rows[11],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    /// Render once on a test terminal so hit rectangles are populated
    fn draw(dialog: &mut ExportDialog) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
    }

    #[test]
    fn test_opens_with_defaults() {
        let dialog = ExportDialog::default();
        assert_eq!(dialog.format, ExportFormat::HtmlCss);
        assert!(dialog.html_options.include_assets);
        assert!(dialog.html_options.include_custom_code);
        assert_eq!(dialog.focus, ExportDialogFocus::Format);
        assert_eq!(dialog.option_count(), 2);
    }

    #[test]
    fn test_space_toggles_only_the_focused_option() {
        let mut dialog = ExportDialog::default();
        dialog.handle_key_event(key(KeyCode::Tab)).unwrap();
        dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap();

        assert!(!dialog.html_options.include_assets);
        assert!(dialog.html_options.include_custom_code);

        dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(dialog.html_options.include_assets);
    }

    #[test]
    fn test_space_without_option_focus_is_inert() {
        let mut dialog = ExportDialog::default();
        dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(dialog.html_options, HtmlExportOptions::default());
    }

    #[test]
    fn test_tab_switch_preserves_both_option_sets() {
        let mut dialog = ExportDialog::default();

        // Toggle "include assets" on the HTML tab
        dialog.handle_key_event(key(KeyCode::Tab)).unwrap();
        dialog.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(!dialog.html_options.include_assets);

        // Framework tab still shows all defaults
        dialog.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(dialog.format, ExportFormat::FrameworkProject);
        assert_eq!(dialog.framework_options, FrameworkExportOptions::default());
        assert_eq!(dialog.option_count(), 3);

        // Back to HTML: earlier choice survived
        dialog.handle_key_event(key(KeyCode::Left)).unwrap();
        assert!(!dialog.html_options.include_assets);
        assert!(dialog.html_options.include_custom_code);
    }

    #[test]
    fn test_switching_to_shorter_tab_clamps_option_index() {
        let mut dialog = ExportDialog::default();
        dialog.select_format(ExportFormat::FrameworkProject);
        dialog.focus = ExportDialogFocus::Options;
        dialog.option_index = 2;

        dialog.select_format(ExportFormat::HtmlCss);
        assert_eq!(dialog.option_index, 1);
    }

    #[test]
    fn test_enter_confirms_and_esc_closes() {
        let mut dialog = ExportDialog::default();
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ConfirmModal)
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut dialog = ExportDialog::default();
        dialog.select_format(ExportFormat::FrameworkProject);
        dialog.framework_options.toggle(0);
        dialog.focus = ExportDialogFocus::Options;
        dialog.option_index = 2;

        dialog.reset();
        assert_eq!(dialog.format, ExportFormat::HtmlCss);
        assert_eq!(dialog.framework_options, FrameworkExportOptions::default());
        assert_eq!(dialog.focus, ExportDialogFocus::Format);
        assert_eq!(dialog.option_index, 0);
    }

    #[test]
    fn test_request_carries_the_active_format_options() {
        let mut dialog = ExportDialog::default();
        dialog.html_options.toggle(0);

        let request = dialog.request();
        assert_eq!(request.format, ExportFormat::HtmlCss);
        match request.options {
            ExportOptions::HtmlCss(opts) => {
                assert!(!opts.include_assets);
                assert!(opts.include_custom_code);
            }
            _ => panic!("expected HTML & CSS options"),
        }
    }

    #[test]
    fn test_mouse_is_ignored_before_first_draw() {
        let mut dialog = ExportDialog::default();
        assert_eq!(dialog.handle_mouse_event(click(0, 0)).unwrap(), None);
    }

    #[test]
    fn test_overlay_click_closes_and_mutates_nothing() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        let outside = (dialog.panel_area.x.saturating_sub(1), dialog.panel_area.y);
        let action = dialog.handle_mouse_event(click(outside.0, outside.1)).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(dialog.html_options, HtmlExportOptions::default());
        assert_eq!(dialog.framework_options, FrameworkExportOptions::default());
        assert_eq!(dialog.format, ExportFormat::HtmlCss);
    }

    #[test]
    fn test_click_inside_panel_does_not_close() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        // A blank row inside the panel: below the header, above the options
        let (x, _) = center(dialog.panel_area);
        let y = dialog.option_areas[0].y - 1;
        assert_eq!(dialog.handle_mouse_event(click(x, y)).unwrap(), None);
    }

    #[test]
    fn test_click_on_tab_switches_format() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        let (x, y) = center(dialog.tab_areas[1]);
        assert_eq!(dialog.handle_mouse_event(click(x, y)).unwrap(), None);
        assert_eq!(dialog.format, ExportFormat::FrameworkProject);
    }

    #[test]
    fn test_click_on_option_row_toggles_it() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        let (x, y) = center(dialog.option_areas[0]);
        dialog.handle_mouse_event(click(x, y)).unwrap();
        assert!(!dialog.html_options.include_assets);
        assert!(dialog.html_options.include_custom_code);
    }

    #[test]
    fn test_click_on_footer_confirms() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        let (x, y) = center(dialog.footer_area);
        assert_eq!(
            dialog.handle_mouse_event(click(x, y)).unwrap(),
            Some(Action::ConfirmModal)
        );
    }

    #[test]
    fn test_non_press_mouse_events_are_ignored() {
        let mut dialog = ExportDialog::default();
        draw(&mut dialog);

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(dialog.handle_mouse_event(moved).unwrap(), None);
    }
}
