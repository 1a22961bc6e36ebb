use record::Record;

/// Handle to a record owned by a [`RecordStore`].
///
/// Handles are only minted by the store, so every `RecordId` a caller holds
/// resolves against the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    /// Position of the record in storage (load) order.
    pub fn position(self) -> usize {
        self.0
    }
}

/// Arena owning every loaded [`Record`].
///
/// Filled once at startup and read-only afterwards: there is no API to
/// mutate or remove a record once pushed.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// How many entries came from the data source; the rest are placeholders.
    loaded: usize,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loaded: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            loaded: 0,
        }
    }

    /// Builds a store whose entries are all "loaded" records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let loaded = records.len();
        Self { records, loaded }
    }

    /// Appends a loaded record. Only valid while no placeholders exist.
    pub fn push(&mut self, record: Record) -> RecordId {
        debug_assert_eq!(self.loaded, self.records.len(), "push after padding");
        let id = RecordId(self.records.len());
        self.records.push(record);
        self.loaded += 1;
        id
    }

    /// Pads the store with zeroed placeholder records up to `capacity`.
    /// Returns the number of placeholders added.
    pub fn pad_to(&mut self, capacity: usize) -> usize {
        let missing = capacity.saturating_sub(self.records.len());
        self.records
            .extend(std::iter::repeat(Record::default()).take(missing));
        missing
    }

    /// Resolves a handle.
    pub fn get(&self, id: RecordId) -> &Record {
        &self.records[id.0]
    }

    /// Total entries, placeholders included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries that came from the data source.
    pub fn loaded_count(&self) -> usize {
        self.loaded
    }

    pub fn placeholder_count(&self) -> usize {
        self.records.len() - self.loaded
    }

    /// Handles for every entry, in storage order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = RecordId> + '_ {
        (0..self.records.len()).map(RecordId)
    }

    /// Storage-order iterator over `(id, record)`.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (RecordId(i), r))
    }
}
