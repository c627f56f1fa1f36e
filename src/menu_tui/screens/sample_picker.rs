//! Sample picker popup: add individual sample dishes to the menu

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, ListItem},
    Frame,
};

use crate::{
    menu_tui::{
        components::ListView,
        handlers::CommonKeyHandler,
        traits::{KeyHandler, ScreenAction},
        ui::{centered_rect, truncate_string, Styles},
    },
    models::MenuItem,
};

pub struct SamplePickerScreen {
    pub samples: ListView<MenuItem>,
    pub currency_symbol: String,
}

impl SamplePickerScreen {
    pub fn new(samples: &[MenuItem], currency_symbol: &str) -> Self {
        Self {
            samples: ListView::new(samples.to_vec()),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 50, area);
        f.render_widget(Clear, popup_area);

        let name_width = (popup_area.width as usize).saturating_sub(24).max(8);
        let currency = self.currency_symbol.clone();
        self.samples.render(
            f,
            popup_area,
            "Add Sample Item (Enter: add copy, Esc: close)",
            |_, item, _| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<10}", item.course.as_str()), Styles::course()),
                    Span::raw(truncate_string(&item.dish_name, name_width)),
                    Span::styled(format!("  {}{}", currency, item.price), Styles::price()),
                ]))
            },
        );
    }
}

impl KeyHandler for SamplePickerScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => match self.samples.selected_index() {
                Some(index) => ScreenAction::AddSample(index),
                None => ScreenAction::SetError("No sample item selected".to_string()),
            },
            KeyCode::Esc => ScreenAction::CloseOverlay,
            _ => CommonKeyHandler::handle_navigation_keys(&mut self.samples, key)
                .unwrap_or(ScreenAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::sample_menu;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_adds_selected_sample() {
        let mut picker = SamplePickerScreen::new(&sample_menu(), "$");
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        picker.handle_key_event(down);
        picker.handle_key_event(down);

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(picker.handle_key_event(enter), ScreenAction::AddSample(2));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(picker.handle_key_event(esc), ScreenAction::CloseOverlay);
    }

    #[test]
    fn test_enter_without_selection_reports_error() {
        let mut picker = SamplePickerScreen::new(&[], "$");
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            picker.handle_key_event(enter),
            ScreenAction::SetError("No sample item selected".to_string())
        );
    }
}
