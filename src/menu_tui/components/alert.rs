//! Blocking alert popup

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::menu_tui::ui::{centered_rect, Styles};

/// Modal message; while one is open the app ignores everything but dismissal
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: &str) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.to_string(),
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 30, area);
        f.render_widget(Clear, popup_area);

        let body = vec![
            Line::from(""),
            Line::from(Span::raw(self.message.clone())),
            Line::from(""),
            Line::from(Span::styled("[ OK ]  (Enter/Esc)", Styles::selected())),
        ];

        let popup = Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Styles::error()),
            );

        f.render_widget(popup, popup_area);
    }
}
