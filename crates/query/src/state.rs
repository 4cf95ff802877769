use catalog_protocol::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default number of nodes per result page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search, filter, and pagination parameters for one catalog view.
///
/// Owned by the UI layer, rebuilt or mutated on every interaction, and
/// discarded when the view unmounts. It holds no reference into the node
/// snapshot. An empty category set means "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Case-insensitive substring matched against name and summary
    pub search: String,

    /// Categories to keep; empty keeps everything
    pub categories: BTreeSet<Category>,

    /// Requested page, 1-indexed; clamped to the last valid page at
    /// evaluation time when a narrowed result set has fewer pages
    pub page: usize,

    /// Nodes per page; must be at least 1
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: BTreeSet::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    #[must_use]
    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        self.categories = categories.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
