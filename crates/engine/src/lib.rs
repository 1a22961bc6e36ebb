//! # Engine - the Folio catalog
//!
//! Ties the [`record`], [`store`] and [`index`] crates together into a
//! [`Catalog`]: a read-only set of records loaded once from disk, browsable
//! in load order or key order and searchable by key prefix.
//!
//! ## Architecture
//!
//! ```text
//! data file
//!   |
//!   v
//! ┌───────────────────────────────────────────────┐
//! │                   CATALOG                     │
//! │                                               │
//! │ load.rs → RecordReader → RecordStore          │
//! │              |  (pad_to_capacity?)            │
//! │              v                                │
//! │           IndexArray (identity order)         │
//! │              |                                │
//! │ sort.rs → ensure_sorted() (once)              │
//! │              |                                │
//! │ read.rs → initial_page() / sorted_page()      │
//! │           search() → ResultQueue              │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module     | Purpose                                              |
//! |------------|------------------------------------------------------|
//! | `lib.rs`   | `Catalog` struct, constructors, accessors, `Debug`   |
//! | [`load`]   | Reading the data file into a `RecordStore`            |
//! | `sort.rs`  | Lazy, one-time sorting of the index                  |
//! | `read.rs`  | Pagination and prefix search                         |
//!
//! The store is never mutated after construction. Sorting only reorders the
//! index, so the load-order view stays available after a sort.

pub mod load;
mod read;
mod sort;

use anyhow::Result;
use config::CatalogConfig;
use index::IndexArray;
use record::Record;
use std::path::PathBuf;
use store::{RecordId, RecordStore};

pub use load::load_records;
pub use read::{Page, SearchOutcome};

/// A loaded catalog plus its key index.
///
/// # Read Path
///
/// - [`initial_page`](Catalog::initial_page) walks the store in load order.
/// - [`sorted_page`](Catalog::sorted_page) and [`search`](Catalog::search)
///   sort the index on first use, then read it.
pub struct Catalog {
    pub(crate) store: RecordStore,
    pub(crate) index: IndexArray,
    /// Set once the index has been sorted; later sorts are skipped.
    pub(crate) sorted: bool,
    pub(crate) page_size: usize,
    /// File the records came from, if any (diagnostics only).
    pub(crate) source: Option<PathBuf>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.source)
            .field("records", &self.store.len())
            .field("loaded", &self.store.loaded_count())
            .field("placeholders", &self.store.placeholder_count())
            .field("sorted", &self.sorted)
            .field("page_size", &self.page_size)
            .field("page_count", &self.page_count())
            .finish()
    }
}

impl Catalog {
    /// Loads the catalog described by `config`.
    ///
    /// # Steps
    ///
    /// 1. Read up to `capacity` records from `data_path`. A missing file
    ///    gives an empty catalog; a short trailing chunk is dropped.
    /// 2. If `pad_to_capacity` is set, fill the store with zeroed
    ///    placeholder records up to `capacity`.
    /// 3. Build the index in identity order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        let mut store = RecordStore::with_capacity(config.capacity);
        let summary = load_records(&config.data_path, config.capacity, &mut store)?;

        if summary.trailing_bytes > 0 {
            tracing::warn!(
                "{}: ignoring {} trailing bytes (incomplete record)",
                config.data_path.display(),
                summary.trailing_bytes
            );
        }
        if summary.limit_reached {
            tracing::warn!(
                "{}: capacity of {} records reached, remaining records ignored",
                config.data_path.display(),
                config.capacity
            );
        }
        if config.pad_to_capacity {
            let added = store.pad_to(config.capacity);
            tracing::debug!(added, "padded store with placeholder records");
        }

        tracing::info!(
            path = %config.data_path.display(),
            loaded = store.loaded_count(),
            placeholders = store.placeholder_count(),
            "catalog loaded"
        );

        let mut catalog = Self::from_store(store, config.page_size);
        catalog.source = Some(config.data_path.clone());
        Ok(catalog)
    }

    /// Builds a catalog over in-memory records (tests, benchmarks).
    pub fn from_records(records: Vec<Record>, page_size: usize) -> Self {
        Self::from_store(RecordStore::from_records(records), page_size)
    }

    pub(crate) fn from_store(store: RecordStore, page_size: usize) -> Self {
        let index = IndexArray::new(&store);
        Self {
            store,
            index,
            sorted: false,
            page_size: page_size.max(1),
            source: None,
        }
    }

    /// Entries in the catalog, placeholders included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Entries read from the data source.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.store.loaded_count()
    }

    /// Whether the index has been sorted.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; never less than 1, so an empty catalog still has one
    /// (empty) page to show.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.store.len().div_ceil(self.page_size).max(1)
    }

    /// Resolves a handle returned by [`search`](Catalog::search).
    #[must_use]
    pub fn record(&self, id: RecordId) -> &Record {
        self.store.get(id)
    }

    /// Current index order (identity until the first sort).
    #[must_use]
    pub fn index(&self) -> &IndexArray {
        &self.index
    }
}

#[cfg(test)]
mod tests;
