//! Listing-page state: fetched items plus the active filters.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use content::{ContentItem, FetchState, FilterState, categories};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentListState {
    pub items: FetchState<Vec<ContentItem>>,
    pub filter: FilterState,
}

impl ContentListState {
    /// Items passing the current filters; empty until a fetch succeeds.
    pub fn visible(&self) -> Vec<ContentItem> {
        self.items.data().map(|items| self.filter.apply(items)).unwrap_or_default()
    }

    /// Category buttons, starting with the catch-all.
    pub fn categories(&self) -> Vec<String> {
        self.items.data().map(|items| categories(items)).unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.items.data().map_or(0, Vec::len)
    }

    pub fn select_category(&mut self, category: &str) {
        category.clone_into(&mut self.filter.active_category);
    }

    pub fn set_query(&mut self, query: String) {
        self.filter.search_query = query;
    }

    /// Clear category and query together so only one update is observed.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    /// "3 / 10" style summary, or `None` while nothing is loaded.
    pub fn summary(&self) -> Option<String> {
        self.items.data()?;
        Some(format!("{} / {}", self.visible().len(), self.total()))
    }
}
