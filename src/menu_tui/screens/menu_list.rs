//! Menu list screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::{
    menu_tui::{
        components::ListView,
        traits::{KeyHandler, Navigable, ScreenAction},
        ui::Styles,
    },
    models::{Course, MenuItem},
};

pub const EMPTY_TEXT: &str = "No items yet. Add one or load sample menu.";

/// Scrollable list of the session's menu items
pub struct MenuListScreen {
    pub list: ListView<MenuItem>,
    pub currency_symbol: String,
}

impl MenuListScreen {
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            list: ListView::new(Vec::new()),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Mirror the menu book after it changed
    pub fn set_items(&mut self, items: &[MenuItem]) {
        self.list.set_items(items.to_vec());
    }

    pub fn select_last(&mut self) {
        self.list.navigate_to_last();
    }

    pub fn item_count(&self) -> usize {
        self.list.len()
    }

    /// `Menu Items (<n>)` followed by a per-course breakdown
    pub fn title(&self) -> String {
        let mut title = format!("Menu Items ({})", self.item_count());
        if !self.list.is_empty() {
            let counts: Vec<String> = Course::ALL
                .iter()
                .map(|course| {
                    let n = self.list.items.iter().filter(|i| i.course == *course).count();
                    format!("{} {}", course.as_str(), n)
                })
                .collect();
            title.push_str(&format!(" · {}", counts.join(" · ")));
        }
        title
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let title = self.title();

        if self.list.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(EMPTY_TEXT, Styles::empty_text())))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Styles::inactive_border()),
                );
            f.render_widget(empty, area);
            return;
        }

        let currency = self.currency_symbol.clone();
        self.list.render(f, area, &title, |_, item, _| menu_entry(item, &currency));
    }
}

/// Multi-line list entry for one dish
fn menu_entry<'a>(item: &MenuItem, currency: &str) -> ListItem<'a> {
    let mut lines = vec![
        Line::from(Span::styled(item.dish_name.clone(), Styles::dish_name())),
        Line::from(Span::raw(item.description.clone())),
        Line::from(Span::styled(format!("Course: {}", item.course), Styles::course())),
        Line::from(Span::styled(format!("Price: {}{}", currency, item.price), Styles::price())),
    ];
    if let Some(url) = &item.image_url {
        lines.push(Line::from(Span::styled(format!("Image: {}", url), Styles::inactive())));
    }
    lines.push(Line::from(""));
    ListItem::new(Text::from(lines))
}

impl KeyHandler for MenuListScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageUp => self.list.navigate_up(),
            KeyCode::PageDown => self.list.navigate_down(),
            KeyCode::Up if ctrl => self.list.navigate_up(),
            KeyCode::Down if ctrl => self.list.navigate_down(),
            KeyCode::Home if ctrl => self.list.navigate_to_first(),
            KeyCode::End if ctrl => self.list.navigate_to_last(),
            _ => return ScreenAction::None,
        }
        match self.list.selected() {
            Some(item) => ScreenAction::SetStatus(format!(
                "{} of {}: {}",
                self.list.selected_index().map(|i| i + 1).unwrap_or(0),
                self.item_count(),
                item.dish_name
            )),
            None => ScreenAction::None,
        }
    }
}

impl MenuListScreen {
    /// Keys this screen consumes even while the form has focus
    pub fn is_list_key(key: &KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageUp | KeyCode::PageDown => true,
            KeyCode::Up | KeyCode::Down | KeyCode::Home | KeyCode::End => ctrl,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::sample_menu;

    #[test]
    fn test_title_tracks_item_count() {
        let mut screen = MenuListScreen::new("$");
        assert_eq!(screen.title(), "Menu Items (0)");

        screen.set_items(&sample_menu());
        assert_eq!(
            screen.title(),
            "Menu Items (3) · Starters 1 · Mains 1 · Dessert 1"
        );
    }

    #[test]
    fn test_page_keys_move_selection() {
        let mut screen = MenuListScreen::new("$");
        screen.set_items(&sample_menu());

        let action = screen.handle_key_event(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert_eq!(
            action,
            ScreenAction::SetStatus("2 of 3: Grilled Ribeye Steak".to_string())
        );

        screen.handle_key_event(KeyEvent::new(KeyCode::End, KeyModifiers::CONTROL));
        assert_eq!(screen.list.selected_index(), Some(2));
    }

    #[test]
    fn test_list_keys() {
        assert!(MenuListScreen::is_list_key(&KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)));
        assert!(MenuListScreen::is_list_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL)));
        assert!(!MenuListScreen::is_list_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
    }
}
