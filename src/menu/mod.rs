//! Menu book: the session's list of dishes and the operations that grow it

pub mod book;
pub mod errors;
pub mod ids;
pub mod sample;

pub use book::{MenuBook, SampleLoadMode};
pub use errors::{Field, MenuError};
pub use sample::sample_menu;
