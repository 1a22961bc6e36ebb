//! Cold-start path: reading the data file into a [`RecordStore`].

use anyhow::{Context, Result};
use record::{ReadSummary, RecordError, RecordReader};
use std::path::Path;
use store::RecordStore;

/// Appends up to `capacity` records from the file at `path` to `store`.
///
/// If the file does not exist, returns an empty summary (fresh start with
/// an empty catalog).
///
/// # Errors
///
/// Propagates any other open or read failure from [`RecordReader`].
pub fn load_records<P: AsRef<Path>>(
    path: P,
    capacity: usize,
    store: &mut RecordStore,
) -> Result<ReadSummary> {
    let path = path.as_ref();

    match RecordReader::open(path) {
        Ok(mut reader) => reader
            .read_up_to(capacity, |record| {
                store.push(record);
            })
            .with_context(|| format!("failed to read records from {}", path.display())),
        Err(RecordError::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("{} not found, starting with an empty catalog", path.display());
            Ok(ReadSummary::default())
        }
        Err(e) => {
            Err(anyhow::anyhow!(e).context(format!("failed to open {}", path.display())))
        }
    }
}
