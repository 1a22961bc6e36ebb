//! Prefix search over a key-sorted index.
//!
//! Only the first [`PREFIX_LEN`](crate::PREFIX_LEN) bytes of the query and
//! of each key are compared, lowercased. The index must be sorted with
//! [`IndexArray::sort`]; searching an index in any other order may miss
//! matches.

use std::cmp::Ordering;
use std::ops::Range;

use store::RecordStore;

use crate::array::IndexArray;
use crate::key::{record_key, PrefixKey};
use crate::queue::ResultQueue;

impl IndexArray {
    /// Locates the run of ids whose key prefix equals the query's.
    ///
    /// Returns the index range `[first, end)` of the run, or `None` when no
    /// key matches. An empty query matches records with an empty key.
    pub fn find_prefix(&self, store: &RecordStore, query: &[u8]) -> Option<Range<usize>> {
        debug_assert!(self.is_sorted(store), "prefix search on an unsorted index");

        let wanted = PrefixKey::of(query);
        let first = self.leftmost_match(store, &wanted)?;
        let run = self.ids[first..]
            .iter()
            .take_while(|&&id| PrefixKey::of(record_key(store.get(id))) == wanted)
            .count();

        Some(first..first + run)
    }

    /// Collects every match into a [`ResultQueue`] in index order.
    ///
    /// `None` means "not found"; a returned queue is never empty.
    pub fn search(&self, store: &RecordStore, query: &[u8]) -> Option<ResultQueue> {
        let range = self.find_prefix(store, query)?;

        let mut queue = ResultQueue::with_capacity(range.len());
        for &id in &self.ids[range] {
            queue.push(id);
        }
        Some(queue)
    }

    /// Binary search that keeps going left after a hit, so the result is the
    /// first matching position.
    fn leftmost_match(&self, store: &RecordStore, wanted: &PrefixKey) -> Option<usize> {
        let mut left = 0isize;
        let mut right = self.ids.len() as isize - 1;
        let mut found = None;

        while left <= right {
            let mid = left + (right - left) / 2;
            let candidate = PrefixKey::of(record_key(store.get(self.ids[mid as usize])));

            match candidate.cmp(wanted) {
                Ordering::Equal => {
                    found = Some(mid as usize);
                    right = mid - 1;
                }
                Ordering::Less => left = mid + 1,
                Ordering::Greater => right = mid - 1,
            }
        }

        found
    }
}
