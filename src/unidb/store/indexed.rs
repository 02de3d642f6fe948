use super::RecordStore;
use crate::model::{Record, RecordId};
use std::collections::HashMap;

// Tombstones below this count are never worth compacting.
const COMPACT_FLOOR: usize = 32;

/// Records in insertion-ordered slots with a hash index from id to slots.
///
/// Removal leaves a tombstone so the positions held by the index stay valid.
/// Once tombstones outnumber live records the slots are compacted and the
/// index rebuilt.
#[derive(Debug, Clone)]
pub struct IndexedStore<R> {
    slots: Vec<Option<R>>,
    // Ascending slot positions per id; the head is the first match.
    index: HashMap<RecordId, Vec<usize>>,
    live: usize,
}

impl<R> Default for IndexedStore<R> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            live: 0,
        }
    }
}

impl<R: Record> IndexedStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn tombstones(&self) -> usize {
        self.slots.len() - self.live
    }

    fn compact(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        self.index.clear();
        for record in slots.into_iter().flatten() {
            let pos = self.slots.len();
            self.index.entry(record.id()).or_default().push(pos);
            self.slots.push(Some(record));
        }
    }
}

impl<R: Record> RecordStore<R> for IndexedStore<R> {
    fn insert(&mut self, record: R) {
        let pos = self.slots.len();
        self.index.entry(record.id()).or_default().push(pos);
        self.slots.push(Some(record));
        self.live += 1;
    }

    fn find(&self, id: RecordId) -> Option<&R> {
        let pos = *self.index.get(&id)?.first()?;
        self.slots[pos].as_ref()
    }

    fn remove(&mut self, id: RecordId) -> Option<R> {
        let positions = self.index.get_mut(&id)?;
        let pos = positions.remove(0);
        if positions.is_empty() {
            self.index.remove(&id);
        }
        let record = self.slots[pos].take()?;
        self.live -= 1;

        if self.tombstones() > COMPACT_FLOOR && self.tombstones() > self.live {
            self.compact();
        }
        Some(record)
    }

    fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.slots.iter().flatten()
    }

    fn len(&self) -> usize {
        self.live
    }
}
