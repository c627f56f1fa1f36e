//! In-memory menu book

use std::str::FromStr;
use tracing::{debug, info, warn};

use super::errors::{Field, MenuError};
use super::ids::IdGenerator;
use super::sample::sample_menu;
use crate::models::{Course, MenuDraft, MenuItem};

/// How loading the sample menu treats the existing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleLoadMode {
    /// Replace the list with the literal sample records
    #[default]
    Replace,
    /// Append copies of the sample records under fresh ids
    Append,
}

impl SampleLoadMode {
    pub fn as_str(&self) -> &str {
        match self {
            SampleLoadMode::Replace => "replace",
            SampleLoadMode::Append => "append",
        }
    }
}

impl FromStr for SampleLoadMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(SampleLoadMode::Replace),
            "append" => Ok(SampleLoadMode::Append),
            other => Err(anyhow::anyhow!(
                "Unsupported sample mode: {}. Supported modes: replace, append",
                other
            )),
        }
    }
}

/// Insertion-ordered list of menu items owned by one session.
///
/// Items are only ever appended, or replaced wholesale by the sample menu.
#[derive(Debug)]
pub struct MenuBook {
    items: Vec<MenuItem>,
    samples: Vec<MenuItem>,
    ids: IdGenerator,
    default_image_url: Option<String>,
}

impl Default for MenuBook {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBook {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            samples: sample_menu(),
            ids: IdGenerator::new(),
            default_image_url: None,
        }
    }

    /// Attach this image URL to every custom item added from now on
    pub fn with_default_image_url(mut self, url: Option<String>) -> Self {
        self.default_image_url = url;
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn samples(&self) -> &[MenuItem] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_by_course(&self, course: Course) -> usize {
        self.items.iter().filter(|item| item.course == course).count()
    }

    /// Validate the draft and append it as a new item
    pub fn add_custom(&mut self, draft: &MenuDraft) -> Result<&MenuItem, MenuError> {
        let dish_name = draft.dish_name.trim();
        let description = draft.description.trim();
        let price = draft.price.trim();

        let missing: Vec<Field> = [
            (Field::DishName, dish_name),
            (Field::Description, description),
            (Field::Price, price),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            warn!("Rejected menu item, missing fields: {:?}", missing);
            return Err(MenuError::MissingFields(missing));
        }

        let item = MenuItem {
            id: self.ids.next_id(),
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            course: draft.course,
            price: price.to_string(),
            image_url: self.default_image_url.clone(),
        };
        debug!("Adding menu item {} ({})", item.id, item.dish_name);
        Ok(self.push(item))
    }

    /// Append a copy of sample `index` under a fresh id
    pub fn add_sample(&mut self, index: usize) -> Result<&MenuItem, MenuError> {
        let sample = self
            .samples
            .get(index)
            .ok_or(MenuError::UnknownSample(index))?;
        let item = sample.with_id(self.ids.next_id());
        debug!("Adding sample item {} as {}", sample.id, item.id);
        Ok(self.push(item))
    }

    /// Seed the list from the sample menu, returning how many items it now holds
    pub fn load_sample(&mut self, mode: SampleLoadMode) -> usize {
        match mode {
            SampleLoadMode::Replace => {
                self.items = self.samples.clone();
            }
            SampleLoadMode::Append => {
                let copies: Vec<MenuItem> = self
                    .samples
                    .iter()
                    .map(|sample| sample.with_id(self.ids.next_id()))
                    .collect();
                self.items.extend(copies);
            }
        }
        info!("Loaded sample menu ({}), {} items", mode.as_str(), self.items.len());
        self.items.len()
    }

    fn push(&mut self, item: MenuItem) -> &MenuItem {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> MenuDraft {
        MenuDraft::new("  Caesar Salad ", "Fresh romaine with croutons", Course::Starters, " 12.99 ")
    }

    #[test]
    fn test_blank_fields_leave_list_unchanged() {
        let mut book = MenuBook::new();
        book.add_custom(&full_draft()).unwrap();

        let drafts = [
            MenuDraft::new("", "desc", Course::Mains, "1.00"),
            MenuDraft::new("name", "   ", Course::Mains, "1.00"),
            MenuDraft::new("name", "desc", Course::Mains, ""),
        ];
        for draft in &drafts {
            assert!(matches!(book.add_custom(draft), Err(MenuError::MissingFields(_))));
            assert_eq!(book.len(), 1);
        }
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut book = MenuBook::new();
        let err = book
            .add_custom(&MenuDraft::new(" ", "desc", Course::Mains, ""))
            .unwrap_err();
        assert_eq!(err.fields(), &[Field::DishName, Field::Price]);
        assert_eq!(err.to_string(), "Please fill in dish name, description, and price.");
    }

    #[test]
    fn test_add_custom_appends_trimmed_item() {
        let mut book = MenuBook::new();
        let mut draft = full_draft();
        draft.course = Course::Dessert;

        let item = book.add_custom(&draft).unwrap().clone();
        assert_eq!(book.len(), 1);
        assert_eq!(item.dish_name, "Caesar Salad");
        assert_eq!(item.description, "Fresh romaine with croutons");
        assert_eq!(item.price, "12.99");
        assert_eq!(item.course, Course::Dessert);
        assert_eq!(item.image_url, None);
        assert_eq!(book.items().last(), Some(&item));
    }

    #[test]
    fn test_default_image_url_applies_to_custom_items() {
        let url = "https://example.com/dish.jpg".to_string();
        let mut book = MenuBook::new().with_default_image_url(Some(url.clone()));
        let item = book.add_custom(&full_draft()).unwrap();
        assert_eq!(item.image_url.as_deref(), Some(url.as_str()));
    }

    #[test]
    fn test_add_sample_copies_with_distinct_id() {
        let mut book = MenuBook::new();
        let before = book.samples().to_vec();

        let first = book.add_sample(0).unwrap().clone();
        let second = book.add_sample(0).unwrap().clone();

        assert_eq!(book.len(), 2);
        assert_ne!(first.id, second.id);
        assert_ne!(first.id, before[0].id);
        assert_eq!(first.dish_name, before[0].dish_name);
        assert_eq!(book.samples(), before.as_slice());
    }

    #[test]
    fn test_add_unknown_sample() {
        let mut book = MenuBook::new();
        assert_eq!(book.add_sample(7).unwrap_err(), MenuError::UnknownSample(7));
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_sample_replace_discards_existing() {
        let mut book = MenuBook::new();
        book.add_custom(&full_draft()).unwrap();

        assert_eq!(book.load_sample(SampleLoadMode::Replace), 3);
        let ids: Vec<&str> = book.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_load_sample_append_keeps_existing() {
        let mut book = MenuBook::new();
        book.add_custom(&full_draft()).unwrap();
        book.load_sample(SampleLoadMode::Append);
        book.load_sample(SampleLoadMode::Append);

        assert_eq!(book.len(), 7);
        assert_eq!(book.items()[0].dish_name, "Caesar Salad");
        let mut ids: Vec<&str> = book.items().iter().map(|item| item.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
        assert_eq!(book.count_by_course(Course::Starters), 3);
    }

    #[test]
    fn test_sample_mode_parse() {
        assert_eq!("Append".parse::<SampleLoadMode>().unwrap(), SampleLoadMode::Append);
        assert!("merge".parse::<SampleLoadMode>().is_err());
    }
}
