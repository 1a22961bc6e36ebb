//! Read path: pagination and prefix search.
//!
//! Load-order pages come straight from the store. Key-order pages and
//! searches go through the index, sorting it first if needed.

use index::ResultQueue;
use record::Record;
use std::ops::Range;

use crate::Catalog;

/// One page of rows, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Zero-based page number (after clamping).
    pub index: usize,
    /// Total number of pages in the catalog.
    pub total: usize,
    pub rows: Vec<&'a Record>,
}

impl Page<'_> {
    /// One-based page number for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }
}

/// Result of a prefix search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one record matched; ids in ascending key order.
    Found(ResultQueue),
    /// No key shares the query's prefix.
    NotFound,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Number of matches (0 for `NotFound`).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Found(queue) => queue.len(),
            SearchOutcome::NotFound => 0,
        }
    }
}

impl Catalog {
    /// Page `page` (zero-based) of the catalog in load order.
    ///
    /// Pages past the end are clamped to the last page.
    pub fn initial_page(&self, page: usize) -> Page<'_> {
        let (index, range) = self.page_bounds(page);
        let rows = self
            .store
            .iter()
            .skip(range.start)
            .take(range.len())
            .map(|(_, record)| record)
            .collect();

        Page {
            index,
            total: self.page_count(),
            rows,
        }
    }

    /// Page `page` (zero-based) of the catalog in key order, sorting the
    /// index first if needed.
    pub fn sorted_page(&mut self, page: usize) -> Page<'_> {
        self.ensure_sorted();

        let (index, range) = self.page_bounds(page);
        let rows = self
            .index
            .slice(range)
            .iter()
            .map(|&id| self.store.get(id))
            .collect();

        Page {
            index,
            total: self.page_count(),
            rows,
        }
    }

    /// Finds every record whose key starts with the same three characters
    /// as `query` (ASCII case ignored), sorting the index first if needed.
    ///
    /// Queries shorter than three characters match only keys of exactly
    /// that text; the empty query matches records without a key.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        self.ensure_sorted();

        match self.index.search(&self.store, query.as_bytes()) {
            Some(queue) => {
                tracing::debug!(query, matches = queue.len(), "search hit");
                SearchOutcome::Found(queue)
            }
            None => {
                tracing::debug!(query, "search miss");
                SearchOutcome::NotFound
            }
        }
    }

    /// Clamps `page` and returns it with its row range.
    fn page_bounds(&self, page: usize) -> (usize, Range<usize>) {
        let page = page.min(self.page_count() - 1);
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.store.len());
        (page, start..end.max(start))
    }
}
