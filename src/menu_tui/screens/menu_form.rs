//! Add-item form screen

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    menu::Field,
    menu_tui::{
        components::{CourseSelector, FormField, FormFieldType},
        handlers::CommonKeyHandler,
        traits::{FormHandler, KeyHandler, ScreenAction},
        ui::Styles,
    },
    models::{Course, MenuDraft},
};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormFocus {
    DishName,
    Description,
    Course,
    Price,
}

impl FormFocus {
    pub const ORDER: [FormFocus; 4] = [
        FormFocus::DishName,
        FormFocus::Description,
        FormFocus::Course,
        FormFocus::Price,
    ];
}

/// Form screen state
pub struct MenuFormScreen {
    pub current_field: usize,
    pub dish_name: FormField,
    pub description: FormField,
    pub course: CourseSelector,
    pub price: FormField,
}

impl Default for MenuFormScreen {
    fn default() -> Self {
        Self::new("$")
    }
}

impl MenuFormScreen {
    pub fn new(currency_symbol: &str) -> Self {
        let mut form = Self {
            current_field: 0,
            dish_name: FormField::new("Dish Name", FormFieldType::Text)
                .with_placeholder("e.g., Caesar Salad"),
            description: FormField::new("Description", FormFieldType::TextArea)
                .with_placeholder("Fresh romaine with croutons..."),
            course: CourseSelector::new(),
            price: FormField::new(&format!("Price ({})", currency_symbol), FormFieldType::Numeric)
                .with_placeholder("12.99"),
        };
        form.update_field_focus();
        form
    }

    pub fn focus(&self) -> FormFocus {
        FormFocus::ORDER[self.current_field]
    }

    pub fn update_field_focus(&mut self) {
        let focus = self.focus();
        self.dish_name.set_focus(focus == FormFocus::DishName);
        self.description.set_focus(focus == FormFocus::Description);
        self.course.set_focus(focus == FormFocus::Course);
        self.price.set_focus(focus == FormFocus::Price);
    }

    fn focused_text_field(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            FormFocus::DishName => Some(&mut self.dish_name),
            FormFocus::Description => Some(&mut self.description),
            FormFocus::Price => Some(&mut self.price),
            FormFocus::Course => None,
        }
    }

    /// Current values as typed
    pub fn draft(&self) -> MenuDraft {
        MenuDraft {
            dish_name: self.dish_name.value.clone(),
            description: self.description.value.clone(),
            course: self.course.selected,
            price: self.price.value.clone(),
        }
    }

    /// Clear text fields, reset the course and return focus to the first field
    pub fn reset(&mut self) {
        self.dish_name.clear();
        self.description.clear();
        self.price.clear();
        self.course.select(Course::default());
        self.current_field = 0;
        self.update_field_focus();
    }

    /// Flag the given fields and move focus to the first of them
    pub fn mark_missing(&mut self, fields: &[Field]) {
        for field in fields {
            match field {
                Field::DishName => self.dish_name.has_error = true,
                Field::Description => self.description.has_error = true,
                Field::Price => self.price.has_error = true,
            }
        }
        if let Some(first) = fields.first() {
            let target = match first {
                Field::DishName => FormFocus::DishName,
                Field::Description => FormFocus::Description,
                Field::Price => FormFocus::Price,
            };
            if let Some(index) = FormFocus::ORDER.iter().position(|f| *f == target) {
                self.set_current_field(index);
            }
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Add Menu Item")
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        self.dish_name.render(f, chunks[0]);
        self.description.render(f, chunks[1]);
        self.course.render(f, chunks[2]);
        self.price.render(f, chunks[3]);
        self.draw_buttons(f, chunks[4]);
    }

    fn draw_buttons(&self, f: &mut Frame, area: Rect) {
        let buttons = Line::from(vec![
            Span::styled(" Enter: Add Menu Item ", Styles::selected()),
            Span::raw("  "),
            Span::styled("F3: Add Sample Item", Styles::info()),
            Span::raw("  "),
            Span::styled("F2: Load Sample Menu", Styles::success()),
        ]);
        f.render_widget(Paragraph::new(buttons).block(Block::default().borders(Borders::ALL)), area);
    }
}

impl FormHandler for MenuFormScreen {
    fn get_current_field(&self) -> usize {
        self.current_field
    }

    fn set_current_field(&mut self, field: usize) {
        if field < FormFocus::ORDER.len() {
            self.current_field = field;
            self.update_field_focus();
        }
    }

    fn get_field_count(&self) -> usize {
        FormFocus::ORDER.len()
    }

    fn handle_char_input(&mut self, c: char) {
        match self.focused_text_field() {
            Some(field) => {
                field.insert_char(c);
            }
            None if c == ' ' => self.course.next(),
            None => {}
        }
    }

    fn handle_backspace(&mut self) {
        if let Some(field) = self.focused_text_field() {
            field.delete_char();
        }
    }

    fn handle_delete(&mut self) {
        if let Some(field) = self.focused_text_field() {
            field.delete_char_forward();
        }
    }

    fn submit(&mut self) -> ScreenAction {
        ScreenAction::AddMenuItem
    }
}

impl KeyHandler for MenuFormScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> ScreenAction {
        let on_course = self.focus() == FormFocus::Course;
        match key.code {
            KeyCode::Left if on_course => self.course.previous(),
            KeyCode::Right if on_course => self.course.next(),
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => {
                if let Some(field) = self.focused_text_field() {
                    match key.code {
                        KeyCode::Left => field.move_cursor_left(),
                        KeyCode::Right => field.move_cursor_right(),
                        KeyCode::Home => field.move_cursor_to_start(),
                        _ => field.move_cursor_to_end(),
                    }
                }
            }
            _ => return CommonKeyHandler::handle_form_keys(self, key).unwrap_or(ScreenAction::None),
        }
        ScreenAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(form: &mut MenuFormScreen, code: KeyCode) -> ScreenAction {
        form.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(form: &mut MenuFormScreen, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_fields() {
        let mut form = MenuFormScreen::new("$");
        type_str(&mut form, "Soup");
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "Hot tomato soup");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "6.5");

        let draft = form.draft();
        assert_eq!(draft, MenuDraft::new("Soup", "Hot tomato soup", Course::Dessert, "6.5"));
    }

    #[test]
    fn test_enter_submits() {
        let mut form = MenuFormScreen::new("$");
        assert_eq!(press(&mut form, KeyCode::Enter), ScreenAction::AddMenuItem);
    }

    #[test]
    fn test_back_tab_wraps_to_price() {
        let mut form = MenuFormScreen::new("$");
        press(&mut form, KeyCode::BackTab);
        assert_eq!(form.focus(), FormFocus::Price);
        assert!(form.price.is_focused);
        assert!(!form.dish_name.is_focused);
    }

    #[test]
    fn test_reset_clears_and_restores_starters() {
        let mut form = MenuFormScreen::new("$");
        type_str(&mut form, "Soup");
        form.set_current_field(2);
        press(&mut form, KeyCode::Char(' '));
        assert_eq!(form.course.selected, Course::Mains);

        form.reset();
        assert_eq!(form.draft(), MenuDraft::default());
        assert_eq!(form.focus(), FormFocus::DishName);
    }

    #[test]
    fn test_mark_missing_focuses_first_blank() {
        let mut form = MenuFormScreen::new("$");
        form.mark_missing(&[Field::Description, Field::Price]);
        assert!(form.description.has_error);
        assert!(form.price.has_error);
        assert!(!form.dish_name.has_error);
        assert_eq!(form.focus(), FormFocus::Description);
    }
}
