use std::cmp::Ordering;
use std::ops::Range;

use store::{RecordId, RecordStore};

use crate::key::{compare_keys, record_key};

/// Reorderable list of handles into a [`RecordStore`].
///
/// Holds one id per store entry and never adds, drops or duplicates one;
/// [`sort`](IndexArray::sort) is the only operation that changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexArray {
    pub(crate) ids: Vec<RecordId>,
}

impl IndexArray {
    /// Identity order over every entry of `store`.
    pub fn new(store: &RecordStore) -> Self {
        Self {
            ids: store.ids().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Current order, read-only.
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// A bounded window of the current order. The range is clamped to the
    /// array, so out-of-range pages come back short or empty.
    pub fn slice(&self, range: Range<usize>) -> &[RecordId] {
        let end = range.end.min(self.ids.len());
        let start = range.start.min(end);
        &self.ids[start..end]
    }

    /// `true` if every adjacent pair is in non-decreasing key order.
    pub fn is_sorted(&self, store: &RecordStore) -> bool {
        self.ids.windows(2).all(|pair| {
            compare_keys(record_key(store.get(pair[0])), record_key(store.get(pair[1])))
                != Ordering::Greater
        })
    }
}
