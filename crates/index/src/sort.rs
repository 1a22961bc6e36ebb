//! In-place Hoare quicksort over the index.
//!
//! The pivot is the key of the leftmost id of each subrange. Keys borrow from
//! the store, not from the id slice, so swapping ids never invalidates the
//! pivot. Equal keys may be reordered; the sort is not stable.

use std::cmp::Ordering;

use store::{RecordId, RecordStore};

use crate::array::IndexArray;
use crate::key::{compare_keys, record_key};

impl IndexArray {
    /// Sorts the ids by record key.
    ///
    /// An array that is already in key order is left exactly as it is (the
    /// check runs before any partitioning), so repeated calls are no-ops.
    /// Returns `true` if the order was changed.
    pub fn sort(&mut self, store: &RecordStore) -> bool {
        if self.is_sorted(store) {
            return false;
        }
        quicksort(&mut self.ids, store);
        true
    }
}

fn key_of(store: &RecordStore, id: RecordId) -> &[u8] {
    record_key(store.get(id))
}

/// Sorts `ids`, recursing into the smaller partition and looping on the
/// larger one so stack depth stays logarithmic.
fn quicksort(mut ids: &mut [RecordId], store: &RecordStore) {
    while ids.len() > 1 {
        let (left_end, right_start) = partition(ids, store);

        let (left, rest) = std::mem::take(&mut ids).split_at_mut(left_end);
        let right = &mut rest[right_start - left_end..];

        if left.len() < right.len() {
            quicksort(left, store);
            ids = right;
        } else {
            quicksort(right, store);
            ids = left;
        }
    }
}

/// One Hoare pass. Returns `(j + 1, i)`: the left part is `ids[..j + 1]`,
/// the right part `ids[i..]`, and anything between them already equals the
/// pivot.
fn partition(ids: &mut [RecordId], store: &RecordStore) -> (usize, usize) {
    let pivot = key_of(store, ids[0]);
    let r = ids.len() as isize - 1;
    let (mut i, mut j) = (0isize, r);

    while i <= j {
        while i <= r && compare_keys(key_of(store, ids[i as usize]), pivot) == Ordering::Less {
            i += 1;
        }
        while j >= 0 && compare_keys(key_of(store, ids[j as usize]), pivot) == Ordering::Greater {
            j -= 1;
        }

        if i <= j {
            ids.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    ((j + 1) as usize, i as usize)
}
