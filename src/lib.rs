//! Chef Menu Manager: an in-memory dish menu edited through a terminal UI

pub mod cli;
pub mod config;
pub mod menu;
pub mod menu_tui;
pub mod models;
