use super::RecordStore;
use crate::model::{Record, RecordId};

/// Records in a `Vec`, looked up by linear scan.
#[derive(Debug, Clone)]
pub struct LinearStore<R> {
    records: Vec<R>,
}

impl<R> Default for LinearStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> for LinearStore<R> {
    fn insert(&mut self, record: R) {
        self.records.push(record);
    }

    fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn remove(&mut self, id: RecordId) -> Option<R> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Faculty;
    use crate::store::contract;

    type Store = LinearStore<Faculty>;

    #[test]
    fn finds_inserted_record() {
        contract::find_after_insert::<Store>();
    }

    #[test]
    fn first_match_wins() {
        contract::first_match_wins_on_duplicates::<Store>();
    }

    #[test]
    fn remove_keeps_order() {
        contract::remove_preserves_order::<Store>();
    }

    #[test]
    fn remove_missing() {
        contract::remove_missing_is_noop::<Store>();
    }

    #[test]
    fn len_matches_iter() {
        contract::len_tracks_iter_under_churn::<Store>();
    }
}
