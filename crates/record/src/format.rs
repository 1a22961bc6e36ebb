//! Fixed-width record layout constants.
//!
//! ```text
//! [author: 12][title: 32][publisher: 16][year: i16 LE][page_count: i16 LE]
//! ```
//!
//! Text fields are NUL-terminated and NUL-padded. The layout has no padding
//! bytes, so one record is exactly [`RECORD_BYTES`] long on disk.

/// Width of the `author` field in bytes (11 visible + terminator).
pub const AUTHOR_WIDTH: usize = 12;

/// Width of the `title` field in bytes (31 visible + terminator).
pub const TITLE_WIDTH: usize = 32;

/// Width of the `publisher` field in bytes (15 visible + terminator).
pub const PUBLISHER_WIDTH: usize = 16;

/// Byte offset of `author` inside a record.
pub const AUTHOR_OFFSET: usize = 0;

/// Byte offset of `title` inside a record.
pub const TITLE_OFFSET: usize = AUTHOR_OFFSET + AUTHOR_WIDTH;

/// Byte offset of `publisher` inside a record.
pub const PUBLISHER_OFFSET: usize = TITLE_OFFSET + TITLE_WIDTH;

/// Byte offset of `year` (`i16` LE) inside a record.
pub const YEAR_OFFSET: usize = PUBLISHER_OFFSET + PUBLISHER_WIDTH;

/// Byte offset of `page_count` (`i16` LE) inside a record.
pub const PAGE_COUNT_OFFSET: usize = YEAR_OFFSET + 2;

/// Total size of one encoded record: 12 + 32 + 16 + 2 + 2.
pub const RECORD_BYTES: usize = PAGE_COUNT_OFFSET + 2;

const _: () = assert!(RECORD_BYTES == 64);
