//! Form field components for user input

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::menu_tui::ui::{wrap_text, wrapped_cursor, Styles};
use crate::models::Course;

/// Type of form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormFieldType {
    Text,
    /// Multi-row text, hard-wrapped to the field width
    TextArea,
    /// Accepts only digits and decimal separators
    Numeric,
}

/// Individual text form field.
///
/// `cursor_position` counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub field_type: FormFieldType,
    pub is_focused: bool,
    pub cursor_position: usize,
    pub has_error: bool,
}

impl FormField {
    pub fn new(label: &str, field_type: FormFieldType) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            placeholder: String::new(),
            field_type,
            is_focused: false,
            cursor_position: 0,
            has_error: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether `c` may be typed into this field
    pub fn accepts(&self, c: char) -> bool {
        match self.field_type {
            FormFieldType::Numeric => c.is_ascii_digit() || c == '.' || c == ',',
            FormFieldType::Text | FormFieldType::TextArea => !c.is_control(),
        }
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let at = self.byte_index(self.cursor_position);
        self.value.insert(at, c);
        self.cursor_position += 1;
        self.has_error = false;
        true
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.value.remove(at);
            self.has_error = false;
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.value.remove(at);
            self.has_error = false;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_position = 0;
        self.has_error = false;
    }

    /// Render the form field
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let display_text = if showing_placeholder {
            &self.placeholder
        } else {
            &self.value
        };

        let border_style = if self.has_error {
            Styles::error()
        } else if self.is_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let title = if self.has_error {
            format!("{} - required", self.label)
        } else {
            self.label.clone()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let text_style = if showing_placeholder {
            Styles::inactive()
        } else {
            Styles::default()
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let (row, col) = self.cursor_cell(inner_width);
        let scroll = self.scroll_rows(row, area);
        let lines: Vec<Line> = match self.field_type {
            FormFieldType::TextArea => wrap_text(display_text, inner_width)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, text_style)))
                .collect(),
            FormFieldType::Text | FormFieldType::Numeric => {
                vec![Line::from(Span::styled(display_text.to_string(), text_style))]
            }
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0));
        f.render_widget(paragraph, area);

        if self.is_focused {
            self.place_cursor(f, area, row - scroll, col);
        }
    }

    /// Row and column of the cursor inside the field's borders, before scrolling
    fn cursor_cell(&self, inner_width: usize) -> (usize, usize) {
        let prefix = &self.value[..self.byte_index(self.cursor_position)];
        match self.field_type {
            FormFieldType::TextArea => wrapped_cursor(prefix, inner_width),
            FormFieldType::Text | FormFieldType::Numeric => (0, prefix.width()),
        }
    }

    /// Rows to scroll past so the cursor row stays inside the border
    fn scroll_rows(&self, cursor_row: usize, area: Rect) -> usize {
        let inner_height = area.height.saturating_sub(2).max(1) as usize;
        cursor_row.saturating_sub(inner_height - 1)
    }

    fn place_cursor(&self, f: &mut Frame, area: Rect, row: usize, col: usize) {
        let cursor_x = area.x + 1 + col as u16;
        let cursor_y = area.y + 1 + row as u16;
        if cursor_x < area.x + area.width.saturating_sub(1)
            && cursor_y < area.y + area.height.saturating_sub(1)
        {
            f.set_cursor(cursor_x, cursor_y);
        }
    }
}

/// Row of course buttons, one of which is always selected
#[derive(Debug, Clone, Default)]
pub struct CourseSelector {
    pub selected: Course,
    pub is_focused: bool,
}

impl CourseSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub fn select(&mut self, course: Course) {
        self.selected = course;
    }

    pub fn next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.previous();
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, course) in Course::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if *course == self.selected {
                Styles::selected()
            } else {
                Styles::inactive()
            };
            spans.push(Span::styled(format!(" {} ", course.as_str()), style));
        }

        let border_style = if self.is_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let block = Block::default()
            .title("Course (←/→)")
            .borders(Borders::ALL)
            .border_style(border_style);

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
