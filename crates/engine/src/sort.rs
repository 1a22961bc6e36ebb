use std::time::Instant;

use crate::Catalog;

impl Catalog {
    /// Sorts the index by record key unless that already happened.
    ///
    /// Returns `true` if this call ran the sorter, `false` if the catalog
    /// was already sorted. The sorter itself also skips work on an index
    /// that is in order, so a stale flag can never scramble ties.
    pub fn ensure_sorted(&mut self) -> bool {
        if self.sorted {
            return false;
        }

        let started = Instant::now();
        let reordered = self.index.sort(&self.store);
        self.sorted = true;

        tracing::debug!(
            records = self.index.len(),
            reordered,
            elapsed_us = started.elapsed().as_micros() as u64,
            "index sorted"
        );
        true
    }
}
