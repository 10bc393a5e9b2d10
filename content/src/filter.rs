//! Category and free-text filtering of content lists.
//!
//! Both predicates are independent subset filters, so the result does not
//! depend on the order they are applied in. The input order is preserved.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::item::ContentItem;

/// Category label that disables category filtering.
pub const ALL_CATEGORIES: &str = "Tous";

/// Page-local filter selection. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub active_category: String,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { active_category: ALL_CATEGORIES.to_owned(), search_query: String::new() }
    }
}

impl FilterState {
    /// Restore both fields to their defaults in a single mutation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any constraint is currently applied.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_category != ALL_CATEGORIES || !self.search_query.trim().is_empty()
    }

    #[must_use]
    pub fn apply(&self, items: &[ContentItem]) -> Vec<ContentItem> {
        filter_items(items, &self.active_category, &self.search_query)
    }
}

/// Keep items matching `category` exactly (unless it is [`ALL_CATEGORIES`])
/// whose lowercase title or excerpt contains the trimmed, lowercased `query`.
#[must_use]
pub fn filter_items(items: &[ContentItem], category: &str, query: &str) -> Vec<ContentItem> {
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .filter(|item| {
            needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.excerpt.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// `["Tous", ...]` followed by each distinct category in first-appearance order.
#[must_use]
pub fn categories(items: &[ContentItem]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_owned()];
    for item in items {
        if !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}
