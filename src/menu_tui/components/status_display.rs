//! Status bar component

use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::menu_tui::ui::Styles;

/// Types of status messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
}

/// Status message with type and content
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub status_type: StatusType,
    pub timestamp: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(message: String, status_type: StatusType) -> Self {
        Self {
            message,
            status_type,
            timestamp: Local::now(),
        }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, StatusType::Info)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, StatusType::Success)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, StatusType::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, StatusType::Error)
    }
}

/// Status display component
pub struct StatusDisplay {
    pub current_message: Option<StatusMessage>,
    pub message_history: Vec<StatusMessage>,
    pub max_history: usize,
    pub show_timestamp: bool,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self {
            current_message: None,
            message_history: Vec::new(),
            max_history: 50,
            show_timestamp: false,
        }
    }
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamp = true;
        self
    }

    /// Set current status message
    pub fn set_message(&mut self, message: StatusMessage) {
        self.archive_current();
        self.current_message = Some(message);
    }

    pub fn set_info(&mut self, message: String) {
        self.set_message(StatusMessage::info(message));
    }

    pub fn set_success(&mut self, message: String) {
        self.set_message(StatusMessage::success(message));
    }

    pub fn set_warning(&mut self, message: String) {
        self.set_message(StatusMessage::warning(message));
    }

    pub fn set_error(&mut self, message: String) {
        self.set_message(StatusMessage::error(message));
    }

    fn archive_current(&mut self) {
        if let Some(current) = self.current_message.take() {
            self.message_history.push(current);
            if self.message_history.len() > self.max_history {
                self.message_history.remove(0);
            }
        }
    }

    pub fn get_history(&self) -> &[StatusMessage] {
        &self.message_history
    }

    /// The current message and up to `limit - 1` earlier ones, newest first,
    /// always timestamped
    pub fn recent_lines(&self, limit: usize) -> Vec<String> {
        self.current_message
            .iter()
            .chain(self.get_history().iter().rev())
            .take(limit)
            .map(|message| Self::format_message(message, true))
            .collect()
    }

    /// Render the status bar, falling back to `hint` when there is no message
    pub fn render(&self, f: &mut Frame, area: Rect, hint: &str) {
        let line = match &self.current_message {
            Some(message) => {
                let style = match message.status_type {
                    StatusType::Info => Styles::info(),
                    StatusType::Success => Styles::success(),
                    StatusType::Warning => Styles::warning(),
                    StatusType::Error => Styles::error(),
                };
                Line::from(Span::styled(
                    Self::format_message(message, self.show_timestamp),
                    style,
                ))
            }
            None => Line::from(Span::styled(hint.to_string(), Styles::inactive())),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn format_message(message: &StatusMessage, with_timestamp: bool) -> String {
        let prefix = match message.status_type {
            StatusType::Info => "ℹ",
            StatusType::Success => "✓",
            StatusType::Warning => "⚠",
            StatusType::Error => "✗",
        };

        if with_timestamp {
            format!(
                "{} [{}] {}",
                prefix,
                message.timestamp.format("%H:%M:%S"),
                message.message
            )
        } else {
            format!("{} {}", prefix, message.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut status = StatusDisplay::new().with_history(2);
        status.set_info("one".to_string());
        status.set_success("two".to_string());
        status.set_warning("three".to_string());
        status.set_error("four".to_string());

        let history: Vec<&str> = status
            .get_history()
            .iter()
            .map(|m| m.message.as_str())
            .collect();
        assert_eq!(history, ["two", "three"]);
        assert_eq!(
            status.current_message.as_ref().map(|m| m.status_type),
            Some(StatusType::Error)
        );
    }

    #[test]
    fn test_recent_lines_newest_first() {
        let mut status = StatusDisplay::new();
        assert!(status.recent_lines(5).is_empty());

        status.set_info("one".to_string());
        status.set_success("two".to_string());
        status.set_error("three".to_string());

        let lines = status.recent_lines(2);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("✗ ["));
        assert!(lines[0].ends_with("] three"));
        assert!(lines[1].ends_with("] two"));
    }

    #[test]
    fn test_timestamps_in_status_bar() {
        let message = StatusMessage::info("saved".to_string());
        assert_eq!(StatusDisplay::format_message(&message, false), "ℹ saved");

        let stamped = StatusDisplay::format_message(&message, true);
        let expected = format!("ℹ [{}] saved", message.timestamp.format("%H:%M:%S"));
        assert_eq!(stamped, expected);
        assert!(StatusDisplay::new().with_timestamps().show_timestamp);
    }
}
