//! Search result: one page of entities plus pagination metadata

use serde::Serialize;

/// Outcome of a search.
///
/// Built by the search pipeline only; `items.len() <= per_page` and
/// `last_page >= 1` always hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<E> {
    items: Vec<E>,
    total: u64,
    current_page: u64,
    per_page: u64,
    last_page: u64,
}

impl<E> SearchResult<E> {
    pub(crate) fn new(items: Vec<E>, total: u64, current_page: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: total.div_ceil(per_page).max(1),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn into_items(self) -> Vec<E> {
        self.items
    }

    /// Matching items before pagination
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// Convert the page's items, keeping the pagination metadata
    pub fn map_items<U>(self, f: impl FnMut(E) -> U) -> SearchResult<U> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }

    /// JSON view of the result
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        E: Serialize,
    {
        serde_json::to_value(self)
    }
}
