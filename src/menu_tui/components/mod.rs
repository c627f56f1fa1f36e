//! Reusable UI components for the menu TUI

pub mod alert;
pub mod form_field;
pub mod list_view;
pub mod status_display;

pub use alert::Alert;
pub use form_field::{CourseSelector, FormField, FormFieldType};
pub use list_view::ListView;
pub use status_display::{StatusDisplay, StatusType};
