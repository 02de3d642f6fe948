//! # Storage Layer
//!
//! Each registry collection lives in a [`RecordStore`]. The trait keeps the
//! registry independent of how records are laid out in memory.
//!
//! ## Implementations
//!
//! - [`memory::LinearStore`]: a plain `Vec` scanned front to back.
//!   This is the default and the reference behavior.
//! - [`indexed::IndexedStore`]: a hash index from id to slot positions over
//!   an ordered slot list. Lookups stop scanning, listing order is unchanged.
//!
//! ## Contract
//!
//! Every store must:
//! - accept duplicate ids on insert
//! - resolve `find` and `remove` to the earliest-inserted live match
//! - iterate live records in insertion order
//! - keep `len()` equal to the number of records `iter()` yields
//!
//! A [`Backend`] names one store family so a registry can build both of its
//! collections from it.

use crate::model::{Record, RecordId};

pub mod indexed;
pub mod memory;

/// Storage for one collection of records.
pub trait RecordStore<R: Record>: Default {
    /// Append a record; never fails, never deduplicates.
    fn insert(&mut self, record: R);

    /// First record with this id, in insertion order.
    fn find(&self, id: RecordId) -> Option<&R>;

    /// Remove the first record with this id, preserving the order of the rest.
    fn remove(&mut self, id: RecordId) -> Option<R>;

    /// Live records in insertion order.
    fn iter(&self) -> impl Iterator<Item = &R> + '_;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A family of stores, one per record type.
pub trait Backend {
    type Store<R: Record>: RecordStore<R>;
}

/// Selects [`memory::LinearStore`] for every collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Backend for Linear {
    type Store<R: Record> = memory::LinearStore<R>;
}

/// Selects [`indexed::IndexedStore`] for every collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indexed;

impl Backend for Indexed {
    type Store<R: Record> = indexed::IndexedStore<R>;
}

#[cfg(test)]
pub(crate) mod contract {
    //! Behavior every `RecordStore` must share. Each backend runs these.

    use super::RecordStore;
    use crate::model::{Faculty, Record};

    fn prof(id: i32, name: &str) -> Faculty {
        Faculty::new(id, name, "Professor", "Mathematics")
    }

    pub fn find_after_insert<S: RecordStore<Faculty>>() {
        let mut store = S::default();
        store.insert(prof(7, "Dr. Seven"));
        assert_eq!(store.find(7), Some(&prof(7, "Dr. Seven")));
        assert!(store.find(8).is_none());
    }

    pub fn first_match_wins_on_duplicates<S: RecordStore<Faculty>>() {
        let mut store = S::default();
        store.insert(prof(1, "First"));
        store.insert(prof(1, "Second"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find(1).map(|f| f.name()), Some("First"));

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.name, "First");
        assert_eq!(store.find(1).map(|f| f.name()), Some("Second"));
        assert_eq!(store.len(), 1);
    }

    pub fn remove_preserves_order<S: RecordStore<Faculty>>() {
        let mut store = S::default();
        for id in 1..=5 {
            store.insert(prof(id, &format!("Dr. {}", id)));
        }
        assert!(store.remove(3).is_some());
        let ids: Vec<i32> = store.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    pub fn remove_missing_is_noop<S: RecordStore<Faculty>>() {
        let mut store = S::default();
        store.insert(prof(1, "Only"));
        assert!(store.remove(42).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(1).map(|f| f.name()), Some("Only"));
    }

    pub fn len_tracks_iter_under_churn<S: RecordStore<Faculty>>() {
        let mut store = S::default();
        for round in 0..200 {
            store.insert(prof(round % 13, "churn"));
            if round % 3 == 0 {
                store.remove((round * 7) % 13);
            }
            assert_eq!(store.len(), store.iter().count());
        }
    }
}
