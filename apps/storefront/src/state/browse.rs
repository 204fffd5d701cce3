//! # Browse State
//!
//! The shared search query plus one pagination cursor per category.
//!
//! The query is shared: typing in the search box re-filters BOTH category
//! grids. The pagers are independent: Load More under the produce grid
//! leaves the dairy grid alone. Changing the query does not touch either
//! pager (see `grocer_core::pagination` for the consequences).

use std::sync::Mutex;

use grocer_core::{Category, Pager};

/// The mutable browse fields, kept together under one lock so a query
/// update and a pager read can never interleave mid-intent.
#[derive(Debug, Default, Clone)]
pub struct Browse {
    /// The shared filter query, already trimmed.
    pub query: String,

    /// Pagination cursor for the produce grid.
    pub produce: Pager,

    /// Pagination cursor for the dairy grid.
    pub dairy: Pager,
}

impl Browse {
    /// The pager for a category.
    pub fn pager(&self, category: Category) -> &Pager {
        match category {
            Category::Produce => &self.produce,
            Category::Dairy => &self.dairy,
        }
    }

    /// Mutable pager access for a category.
    pub fn pager_mut(&mut self, category: Category) -> &mut Pager {
        match category {
            Category::Produce => &mut self.produce,
            Category::Dairy => &mut self.dairy,
        }
    }
}

/// Session-managed browse state.
#[derive(Debug, Default)]
pub struct BrowseState {
    inner: Mutex<Browse>,
}

impl BrowseState {
    /// Creates browse state with an empty query and fresh pagers.
    pub fn new() -> Self {
        BrowseState {
            inner: Mutex::new(Browse::default()),
        }
    }

    /// Executes a function with read access to the browse fields.
    pub fn with_browse<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Browse) -> R,
    {
        let browse = self.inner.lock().expect("Browse mutex poisoned");
        f(&browse)
    }

    /// Executes a function with write access to the browse fields.
    pub fn with_browse_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Browse) -> R,
    {
        let mut browse = self.inner.lock().expect("Browse mutex poisoned");
        f(&mut browse)
    }
}
