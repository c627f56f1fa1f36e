//! Screen modules for the menu TUI

pub mod help;
pub mod menu_form;
pub mod menu_list;
pub mod sample_picker;

pub use help::HelpScreen;
pub use menu_form::MenuFormScreen;
pub use menu_list::MenuListScreen;
pub use sample_picker::SamplePickerScreen;
