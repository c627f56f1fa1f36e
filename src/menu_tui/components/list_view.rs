//! Generic list view component

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::menu_tui::{traits::Navigable, ui::Styles};

/// Generic selectable list
pub struct ListView<T> {
    pub items: Vec<T>,
    pub state: ListState,
}

impl<T> ListView<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self { items, state }
    }

    /// Update items and maintain selection if possible
    pub fn set_items(&mut self, items: Vec<T>) {
        let selected = self.state.selected();
        self.items = items;

        let selected = match selected {
            _ if self.items.is_empty() => None,
            Some(idx) if idx < self.items.len() => Some(idx),
            _ => Some(0),
        };
        self.state.select(selected);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get currently selected item
    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Render the list, formatting each item with `item_formatter`
    pub fn render<'a, F>(&mut self, f: &mut Frame, area: Rect, title: &str, item_formatter: F)
    where
        F: Fn(usize, &T, bool) -> ListItem<'a>,
    {
        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item_formatter(i, item, Some(i) == selected))
            .collect();

        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Styles::active_border());

        let list = List::new(items)
            .block(block)
            .highlight_style(Styles::selected());

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl<T> Navigable for ListView<T> {
    fn navigate_up(&mut self) {
        self.previous();
    }

    fn navigate_down(&mut self) {
        self.next();
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut list = ListView::new(vec!["a", "b", "c"]);
        list.previous();
        assert_eq!(list.selected(), Some(&"c"));
        list.next();
        assert_eq!(list.selected(), Some(&"a"));
        list.navigate_to_last();
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn test_set_items_keeps_valid_selection() {
        let mut list: ListView<u8> = ListView::new(Vec::new());
        assert_eq!(list.selected_index(), None);

        list.set_items(vec![1, 2]);
        assert_eq!(list.selected_index(), Some(0));

        list.select(Some(1));
        list.set_items(vec![1, 2, 3]);
        assert_eq!(list.selected_index(), Some(1));

        list.set_items(vec![9]);
        assert_eq!(list.selected_index(), Some(0));

        list.set_items(Vec::new());
        assert_eq!(list.selected_index(), None);
    }
}
