//! # Record - fixed-width catalog entries
//!
//! The data model shared by every other Folio crate, plus the binary codec
//! used to load a catalog file.
//!
//! A catalog file is a flat sequence of 64-byte records with no header and no
//! framing. Each record holds three NUL-padded text fields and two
//! little-endian `i16` counters:
//!
//! ```text
//! [author: 12][title: 32][publisher: 16][year: i16][page_count: i16]
//! ```
//!
//! Text is kept as raw bytes. Legacy files were produced with a single-byte
//! code page, so nothing here assumes UTF-8; display code decodes lossily.
//!
//! ## Example
//!
//! ```rust,no_run
//! use record::{Record, RecordReader, RecordWriter};
//!
//! let mut w = RecordWriter::create("books.dat").unwrap();
//! w.append(&Record::new("Tolstoy", "War And Peace", "Penguin", 1869, 1225).unwrap())
//!     .unwrap();
//! w.finish().unwrap();
//!
//! let mut r = RecordReader::open("books.dat").unwrap();
//! let summary = r.read_up_to(4000, |rec| println!("{:?}", rec)).unwrap();
//! assert_eq!(summary.records, 1);
//! ```

mod format;

pub use format::{
    AUTHOR_WIDTH, PAGE_COUNT_OFFSET, PUBLISHER_OFFSET, PUBLISHER_WIDTH, RECORD_BYTES,
    TITLE_OFFSET, TITLE_WIDTH, YEAR_OFFSET,
};

use byteorder::{ByteOrder, LittleEndian};
use std::borrow::Cow;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::format::AUTHOR_OFFSET;

/// Errors produced while building, encoding or reading records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Text does not fit into its fixed-width field (one byte is reserved
    /// for the terminator).
    #[error("{field} is {len} bytes, at most {max} fit")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Text contains a NUL byte, which would silently truncate it on disk.
    #[error("{field} contains a NUL byte")]
    InteriorNul { field: &'static str },
}

/// A NUL-padded text field of exactly `W` bytes.
///
/// The visible text is everything before the first NUL. A field with no NUL
/// at all (possible in foreign files) is visible in full.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedText<const W: usize> {
    buf: [u8; W],
}

impl<const W: usize> FixedText<W> {
    /// Builds a field from `text`, validating that it fits with a terminator.
    ///
    /// `field` is only used to label errors.
    pub fn new(field: &'static str, text: &[u8]) -> Result<Self, RecordError> {
        let max = W - 1;
        if text.len() > max {
            return Err(RecordError::TextTooLong {
                field,
                len: text.len(),
                max,
            });
        }
        if text.contains(&0) {
            return Err(RecordError::InteriorNul { field });
        }
        let mut buf = [0u8; W];
        buf[..text.len()].copy_from_slice(text);
        Ok(Self { buf })
    }

    /// Wraps raw on-disk bytes without validation.
    pub fn from_raw(buf: [u8; W]) -> Self {
        Self { buf }
    }

    /// Visible bytes: up to (excluding) the first NUL.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.buf.iter().position(|&b| b == 0).unwrap_or(W);
        &self.buf[..end]
    }

    /// The full field as stored, padding included.
    pub fn raw(&self) -> &[u8; W] {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Visible text decoded as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl<const W: usize> Default for FixedText<W> {
    fn default() -> Self {
        Self { buf: [0u8; W] }
    }
}

impl<const W: usize> fmt::Debug for FixedText<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl<const W: usize> fmt::Display for FixedText<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags work for table rendering.
        f.pad(&self.to_string_lossy())
    }
}

pub type Author = FixedText<AUTHOR_WIDTH>;
pub type Title = FixedText<TITLE_WIDTH>;
pub type Publisher = FixedText<PUBLISHER_WIDTH>;

/// One catalog entry.
///
/// The all-zero record (`Record::default()`) is the placeholder used when a
/// store is padded up to its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    author: Author,
    title: Title,
    publisher: Publisher,
    year: i16,
    page_count: i16,
}

impl Record {
    /// Builds a record from text fields, rejecting values that would not
    /// survive a round trip through the fixed-width layout.
    pub fn new(
        author: &str,
        title: &str,
        publisher: &str,
        year: i16,
        page_count: i16,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            author: FixedText::new("author", author.as_bytes())?,
            title: FixedText::new("title", title.as_bytes())?,
            publisher: FixedText::new("publisher", publisher.as_bytes())?,
            year,
            page_count,
        })
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// The structured title field; its third token onward is the sort key.
    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn page_count(&self) -> i16 {
        self.page_count
    }

    /// Decodes one record from its exact on-disk bytes. Every byte pattern
    /// is a valid record.
    pub fn decode(buf: &[u8; RECORD_BYTES]) -> Self {
        let mut author = [0u8; AUTHOR_WIDTH];
        let mut title = [0u8; TITLE_WIDTH];
        let mut publisher = [0u8; PUBLISHER_WIDTH];
        author.copy_from_slice(&buf[AUTHOR_OFFSET..TITLE_OFFSET]);
        title.copy_from_slice(&buf[TITLE_OFFSET..PUBLISHER_OFFSET]);
        publisher.copy_from_slice(&buf[PUBLISHER_OFFSET..YEAR_OFFSET]);

        Self {
            author: FixedText::from_raw(author),
            title: FixedText::from_raw(title),
            publisher: FixedText::from_raw(publisher),
            year: LittleEndian::read_i16(&buf[YEAR_OFFSET..PAGE_COUNT_OFFSET]),
            page_count: LittleEndian::read_i16(&buf[PAGE_COUNT_OFFSET..RECORD_BYTES]),
        }
    }

    /// Encodes the record into its exact on-disk bytes.
    pub fn encode(&self) -> [u8; RECORD_BYTES] {
        let mut buf = [0u8; RECORD_BYTES];
        buf[AUTHOR_OFFSET..TITLE_OFFSET].copy_from_slice(self.author.raw());
        buf[TITLE_OFFSET..PUBLISHER_OFFSET].copy_from_slice(self.title.raw());
        buf[PUBLISHER_OFFSET..YEAR_OFFSET].copy_from_slice(self.publisher.raw());
        LittleEndian::write_i16(&mut buf[YEAR_OFFSET..PAGE_COUNT_OFFSET], self.year);
        LittleEndian::write_i16(&mut buf[PAGE_COUNT_OFFSET..RECORD_BYTES], self.page_count);
        buf
    }

    /// Reads exactly one record from `r`.
    ///
    /// Fails with `UnexpectedEof` if fewer than [`RECORD_BYTES`] remain.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf = [0u8; RECORD_BYTES];
        r.read_exact(&mut buf)?;
        Ok(Self::decode(&buf))
    }

    /// Writes the record's on-disk bytes to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.encode())
    }
}

/// Outcome of a bulk read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadSummary {
    /// Number of complete records handed to the callback.
    pub records: usize,
    /// Bytes of an incomplete record found at end of input (ignored).
    pub trailing_bytes: usize,
    /// `true` if reading stopped at the limit while input remained.
    pub limit_reached: bool,
}

/// Sequential reader for a flat record file.
///
/// Generic over any `Read` implementor so tests can feed in-memory buffers
/// (`Cursor<Vec<u8>>`).
pub struct RecordReader<R: Read> {
    rdr: BufReader<R>,
}

impl RecordReader<File> {
    /// Opens a record file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<RecordReader<File>, RecordError> {
        let f = File::open(path)?;
        Ok(RecordReader {
            rdr: BufReader::new(f),
        })
    }
}

impl<R: Read> RecordReader<R> {
    pub fn from_reader(reader: R) -> Self {
        RecordReader {
            rdr: BufReader::new(reader),
        }
    }

    /// Reads at most `limit` records, calling `apply` for each one in file
    /// order.
    ///
    /// # Termination
    ///
    /// - **Clean EOF** -> `Ok` with `trailing_bytes == 0`.
    /// - **Short tail** (fewer than [`RECORD_BYTES`] left) -> `Ok`, the
    ///   partial bytes are counted in `trailing_bytes` and dropped.
    /// - **Limit reached** -> `Ok`, `limit_reached` tells whether input
    ///   remained.
    /// - **I/O error** -> `Err(RecordError::Io(..))`.
    pub fn read_up_to<F>(&mut self, limit: usize, mut apply: F) -> Result<ReadSummary, RecordError>
    where
        F: FnMut(Record),
    {
        let mut summary = ReadSummary::default();
        let mut buf = [0u8; RECORD_BYTES];

        while summary.records < limit {
            let filled = self.fill(&mut buf)?;
            if filled == 0 {
                return Ok(summary);
            }
            if filled < RECORD_BYTES {
                summary.trailing_bytes = filled;
                return Ok(summary);
            }
            apply(Record::decode(&buf));
            summary.records += 1;
        }

        summary.limit_reached = !self.rdr.fill_buf()?.is_empty();
        Ok(summary)
    }

    /// Reads until `buf` is full or EOF, returning the byte count.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.rdr.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

/// Writes a flat record file (fixtures, exports).
pub struct RecordWriter {
    file: BufWriter<File>,
}

impl RecordWriter {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }

    pub fn append(&mut self, record: &Record) -> Result<(), RecordError> {
        record.write_to(&mut self.file)?;
        Ok(())
    }

    /// Flushes buffered records and fsyncs the file.
    pub fn finish(mut self) -> Result<(), RecordError> {
        self.file.flush()?;
        self.file.get_ref().sync_all()?;
        Ok(())
    }
}
