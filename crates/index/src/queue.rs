use std::collections::VecDeque;

use store::RecordId;

/// FIFO of matched record ids, built by one search and drained by its
/// caller.
///
/// Ids come out in the order they were pushed, which for a search is
/// ascending index order. Iterating the queue drains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultQueue {
    items: VecDeque<RecordId>,
}

impl ResultQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends at the back.
    pub fn push(&mut self, id: RecordId) {
        self.items.push_back(id);
    }

    /// Removes from the front; `None` once drained.
    pub fn pop(&mut self) -> Option<RecordId> {
        self.items.pop_front()
    }

    /// Next id without removing it.
    pub fn peek(&self) -> Option<RecordId> {
        self.items.front().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Iterator for ResultQueue {
    type Item = RecordId;

    fn next(&mut self) -> Option<RecordId> {
        self.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl ExactSizeIterator for ResultQueue {}
