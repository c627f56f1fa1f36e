//! Menu book error types

use std::fmt;
use thiserror::Error;

/// Required text fields of the add-item form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DishName,
    Description,
    Price,
}

impl Field {
    pub fn as_str(&self) -> &str {
        match self {
            Field::DishName => "dish name",
            Field::Description => "description",
            Field::Price => "price",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    /// One or more required fields were blank; the list is unchanged
    #[error("Please fill in dish name, description, and price.")]
    MissingFields(Vec<Field>),

    #[error("Sample item {0} does not exist")]
    UnknownSample(usize),
}

impl MenuError {
    /// Fields to flag in the form, empty for errors not tied to input
    pub fn fields(&self) -> &[Field] {
        match self {
            MenuError::MissingFields(fields) => fields,
            MenuError::UnknownSample(_) => &[],
        }
    }
}
