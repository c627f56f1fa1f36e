//! Common UI styles and layout helpers for the menu TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthChar;

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn default() -> Style {
        Style::default()
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dish_name() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn course() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn info() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn empty_text() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Color::Gray)
    }
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Hard-wrap text into rows of at most `width` display columns.
///
/// Breaks fall between characters rather than words so a cursor column can
/// be mapped onto the same rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }
    lines.push(current);
    lines
}

/// Row and column of the cursor after `prefix` when hard-wrapped to `width`
pub fn wrapped_cursor(prefix: &str, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let (mut row, mut col) = (0, 0);
    for c in prefix.chars() {
        let char_width = c.width().unwrap_or(0);
        if col + char_width > width && col > 0 {
            row += 1;
            col = 0;
        }
        col += char_width;
    }
    if col >= width {
        row += 1;
        col = 0;
    }
    (row, col)
}

/// Truncate to `max_width` display columns, ending with an ellipsis if cut
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 3 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_by_columns() {
        assert_eq!(wrap_text("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_text("", 5), vec![""]);
        assert_eq!(wrap_text("sautéed", 4), vec!["saut", "éed"]);
    }

    #[test]
    fn test_wrapped_cursor_matches_wrap() {
        assert_eq!(wrapped_cursor("ab", 3), (0, 2));
        assert_eq!(wrapped_cursor("abc", 3), (1, 0));
        assert_eq!(wrapped_cursor("abcd", 3), (1, 1));
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Garlic Shrimp", 20), "Garlic Shrimp");
        assert_eq!(truncate_string("Grilled Ribeye Steak", 10), "Grilled...");
    }
}
