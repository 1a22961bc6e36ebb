//! # Index - key-sorted view over a record store
//!
//! The sorting and search core of Folio. An [`IndexArray`] is a permutation
//! of [`RecordId`]s into a [`store::RecordStore`]: sorting reorders the ids,
//! never the records, so the store stays in load order and can still be
//! paged through as-is.
//!
//! ## Sort key
//!
//! Every record's key is derived from its title, which is structured as
//! space-separated tokens. The key is everything after the second space:
//!
//! ```text
//! title:  "Doe John Smith Jr"
//!                   ^^^^^^^^ key
//! title:  "OnlyOneToken"       key = "" (fewer than two spaces)
//! ```
//!
//! Keys order ASCII-case-insensitively, raw bytes breaking ties. Prefix
//! search compares only the first [`PREFIX_LEN`] bytes, lowercased. Since
//! truncation is monotone under the full key order, every prefix's matches
//! sit in one contiguous run of a sorted index.
//!
//! ## Flow
//!
//! ```text
//! RecordStore ──ids()──> IndexArray (identity order)
//!                            │ sort()      Hoare quicksort, no-op if sorted
//!                            v
//!                        IndexArray (key order)
//!                            │ search(q)   leftmost binary search + forward scan
//!                            v
//!                        Option<ResultQueue>   None = not found
//! ```

mod array;
mod key;
mod queue;
mod search;
mod sort;

pub use array::IndexArray;
pub use key::{compare_keys, record_key, sort_key, PrefixKey, PREFIX_LEN};
pub use queue::ResultQueue;
pub use store::RecordId;

#[cfg(test)]
mod tests;
