//! Sort-key extraction and comparison.

use record::Record;
use std::cmp::Ordering;
use std::fmt;

/// Number of leading key bytes that take part in prefix search.
pub const PREFIX_LEN: usize = 3;

/// Returns the part of `title` after its second space, or `None` if the
/// title has fewer than two spaces.
///
/// Consecutive spaces each count: `"a  b"` yields `"b"`.
pub fn sort_key(title: &[u8]) -> Option<&[u8]> {
    let first = title.iter().position(|&b| b == b' ')?;
    let rest = &title[first + 1..];
    let second = rest.iter().position(|&b| b == b' ')?;
    Some(&rest[second + 1..])
}

/// The record's sort key, with a missing key read as empty.
pub fn record_key(record: &Record) -> &[u8] {
    sort_key(record.title().as_bytes()).unwrap_or(&[])
}

/// Total order over keys: ASCII-case-insensitive byte order, raw bytes
/// breaking ties.
///
/// This is not plain `strcmp` order: `"Zed"` sorts after `"abe"` here, while
/// a raw byte compare puts every uppercase letter first. Lowercased
/// [`PrefixKey`]s must be monotone under the sort order for a prefix search
/// to find every match in one contiguous run, and raw byte order does not
/// give that on mixed-case keys.
pub fn compare_keys(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
        .then_with(|| a.cmp(b))
}

/// The first [`PREFIX_LEN`] bytes of a key or query, ASCII-lowercased.
///
/// Shorter inputs are kept whole, so `"ab"` only equals keys that are
/// exactly `"ab"` (case aside), not `"abc"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixKey {
    buf: [u8; PREFIX_LEN],
    len: u8,
}

impl PrefixKey {
    pub fn of(bytes: &[u8]) -> Self {
        let len = bytes.len().min(PREFIX_LEN);
        let mut buf = [0u8; PREFIX_LEN];
        for (dst, src) in buf.iter_mut().zip(&bytes[..len]) {
            *dst = src.to_ascii_lowercase();
        }
        Self {
            buf,
            len: len as u8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Ord for PrefixKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for PrefixKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for PrefixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixKey({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
