//! Main TUI application state and logic

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::{
    components::{Alert, StatusDisplay},
    handlers::CommonKeyHandler,
    screens::{HelpScreen, MenuFormScreen, MenuListScreen, SamplePickerScreen},
    traits::{KeyHandler, ScreenAction},
    ui::Styles,
};
use crate::config::Config;
use crate::menu::{MenuBook, SampleLoadMode};

const STATUS_HINT: &str =
    "Enter: Add | F2: Load Sample Menu | F3: Add Sample Item | F1: Help | Ctrl+C: Quit";
const RECENT_ACTIVITY_LINES: usize = 8;

/// Main TUI application state
pub struct App {
    /// Application configuration
    pub config: Config,
    /// The session's menu items
    pub book: MenuBook,
    pub sample_load_mode: SampleLoadMode,

    // Screen states
    pub form: MenuFormScreen,
    pub list: MenuListScreen,
    pub sample_picker: SamplePickerScreen,
    pub help: HelpScreen,
    pub status: StatusDisplay,

    // Global application state
    pub alert: Option<Alert>,
    pub show_sample_picker: bool,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    /// Create a new TUI application
    pub fn new(config: Config) -> Self {
        let book = MenuBook::new().with_default_image_url(config.default_image_url.clone());
        let currency = config.currency_symbol.clone();

        let mut status = StatusDisplay::new().with_history(config.status_history);
        if config.status_timestamps {
            status = status.with_timestamps();
        }

        Self {
            sample_load_mode: config.sample_load_mode,
            form: MenuFormScreen::new(&currency),
            list: MenuListScreen::new(&currency),
            sample_picker: SamplePickerScreen::new(book.samples(), &currency),
            help: HelpScreen::new(),
            status,
            book,
            config,

            alert: None,
            show_sample_picker: false,
            show_help: false,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key)?;
            }
        }

        info!("Application loop completed with {} menu items", self.book.len());
        Ok(())
    }

    /// Handle keyboard input events
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // An open alert blocks everything until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return Ok(());
        }

        // Popups capture every key, quit keys included, until they close
        if self.show_help {
            let action = self.help.handle_key_event(key);
            self.apply(action);
            return Ok(());
        }

        if self.show_sample_picker {
            let action = self.sample_picker.handle_key_event(key);
            self.apply(action);
            return Ok(());
        }

        if let Some(action) = self.global_action(key) {
            self.apply(action);
            return Ok(());
        }

        let action = if MenuListScreen::is_list_key(&key) {
            self.list.handle_key_event(key)
        } else {
            self.form.handle_key_event(key)
        };
        self.apply(action);

        Ok(())
    }

    fn global_action(&self, key: KeyEvent) -> Option<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_quit_keys(key) {
            return Some(action);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(1) => Some(ScreenAction::OpenHelp),
            KeyCode::F(2) => Some(ScreenAction::LoadSampleMenu),
            KeyCode::Char('l') if ctrl => Some(ScreenAction::LoadSampleMenu),
            KeyCode::F(3) => Some(ScreenAction::OpenSamplePicker),
            KeyCode::Char('a') if ctrl => Some(ScreenAction::OpenSamplePicker),
            _ => None,
        }
    }

    /// Apply an action returned by a screen
    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::AddMenuItem => self.add_menu_item(),
            ScreenAction::AddSample(index) => self.add_sample_item(index),
            ScreenAction::LoadSampleMenu => self.load_sample_menu(),
            ScreenAction::OpenSamplePicker => {
                self.show_sample_picker = true;
                self.status.set_info("Choose a sample item to add".to_string());
            }
            ScreenAction::OpenHelp => {
                self.help
                    .set_recent_activity(self.status.recent_lines(RECENT_ACTIVITY_LINES));
                self.show_help = true;
            }
            ScreenAction::CloseOverlay => {
                self.show_sample_picker = false;
                self.show_help = false;
            }
            ScreenAction::SetStatus(message) => self.status.set_info(message),
            ScreenAction::SetError(message) => self.status.set_error(message),
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::None => {}
        }
    }

    /// Submit the form: validate, append, clear
    pub fn add_menu_item(&mut self) {
        let draft = self.form.draft();
        match self.book.add_custom(&draft) {
            Ok(item) => {
                let message = format!("Added {} to {}", item.dish_name, item.course);
                self.form.reset();
                self.sync_list();
                self.list.select_last();
                self.status.set_success(message);
            }
            Err(e) => {
                self.form.mark_missing(e.fields());
                self.status.set_error(e.to_string());
                self.alert = Some(Alert::error(&e.to_string()));
            }
        }
    }

    /// Append a copy of one sample item
    pub fn add_sample_item(&mut self, index: usize) {
        match self.book.add_sample(index) {
            Ok(item) => {
                let message = format!("Added sample {} ({})", item.dish_name, item.id);
                self.sync_list();
                self.list.select_last();
                self.status.set_success(message);
            }
            Err(e) => self.status.set_error(e.to_string()),
        }
    }

    /// Seed the list from the sample menu
    pub fn load_sample_menu(&mut self) {
        let discarded = match self.sample_load_mode {
            SampleLoadMode::Replace => self.book.len(),
            SampleLoadMode::Append => 0,
        };
        let count = self.book.load_sample(self.sample_load_mode);
        self.sync_list();

        let message = format!(
            "Loaded sample menu ({} items, {})",
            count,
            self.sample_load_mode.as_str()
        );
        if discarded > 0 {
            self.status
                .set_warning(format!("{}, replaced {} existing items", message, discarded));
        } else {
            self.status.set_success(message);
        }
    }

    fn sync_list(&mut self) {
        self.list.set_items(self.book.items());
        debug!("Menu list now holds {} items", self.book.len());
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_title(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.form.draw(f, body[0]);
        self.list.draw(f, body[1]);
        self.status.render(f, chunks[2], STATUS_HINT);

        if self.show_sample_picker {
            self.sample_picker.draw(f, size);
        }
        if self.show_help {
            self.help.draw(f, size);
        }
        if let Some(alert) = &self.alert {
            alert.render(f, size);
        }
    }

    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled("Chef Menu Manager", Styles::title())))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }
}
