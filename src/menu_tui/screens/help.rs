//! Help popup listing key bindings

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::menu_tui::{
    traits::{KeyHandler, ScreenAction},
    ui::{centered_rect, Styles},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Form",
        &[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("←/→ or Space", "Change course (on Course)"),
            ("Enter", "Add menu item"),
        ],
    ),
    (
        "Menu list",
        &[
            ("PgUp / PgDn", "Previous / next item"),
            ("Ctrl+↑ / Ctrl+↓", "Previous / next item"),
            ("Ctrl+Home / Ctrl+End", "First / last item"),
        ],
    ),
    (
        "Samples",
        &[
            ("F2 / Ctrl+L", "Load sample menu"),
            ("F3 / Ctrl+A", "Pick a sample item to add"),
        ],
    ),
    (
        "Global",
        &[
            ("F1", "Toggle this help"),
            ("Ctrl+C / Ctrl+Q", "Quit (once popups are closed)"),
        ],
    ),
];

#[derive(Default)]
pub struct HelpScreen {
    pub scroll_offset: u16,
    /// Formatted status messages, newest first
    pub recent_activity: Vec<String>,
}

impl HelpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_recent_activity(&mut self, lines: Vec<String>) {
        self.recent_activity = lines;
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (section, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(*section, Styles::title())));
            for (keys, action) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", keys),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("Recent Activity", Styles::title())));
        if self.recent_activity.is_empty() {
            lines.push(Line::from(Span::styled("  Nothing yet", Styles::inactive())));
        }
        for entry in &self.recent_activity {
            lines.push(Line::from(format!("  {}", entry)));
        }
        lines
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 70, area);
        f.render_widget(Clear, popup_area);

        let help = Paragraph::new(self.lines())
            .scroll((self.scroll_offset, 0))
            .block(
                Block::default()
                    .title("Help - Keyboard Shortcuts (Esc/F1 to close)")
                    .borders(Borders::ALL)
                    .border_style(Styles::warning()),
            );
        f.render_widget(help, popup_area);
    }
}

impl KeyHandler for HelpScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) => {
                self.scroll_offset = 0;
                ScreenAction::CloseOverlay
            }
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down => {
                let max = self.lines().len().saturating_sub(1) as u16;
                self.scroll_offset = (self.scroll_offset + 1).min(max);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut help = HelpScreen::new();
        help.set_recent_activity(vec!["✓ [10:00:00] Added Soup to Starters".to_string()]);
        let total = help.lines().len() as u16;

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..100 {
            help.handle_key_event(down);
        }
        assert_eq!(help.scroll_offset, total - 1);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(help.handle_key_event(esc), ScreenAction::CloseOverlay);
        assert_eq!(help.scroll_offset, 0);
    }
}
