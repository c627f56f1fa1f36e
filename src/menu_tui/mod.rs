//! Chef menu terminal user interface
//!
//! A single screen with the add-item form on the left and the menu list on
//! the right, plus popups for alerts, sample items, and help.

pub mod app;
pub mod components;
pub mod handlers;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::App;
pub use traits::ScreenAction;
