//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the session's [`Registry`] and dispatches on
//! [`RecordKind`] so a client can map a menu entry straight to a call.
//!
//! The API performs no I/O and holds no business logic; every method returns
//! a [`CmdResult`] for the client to render.
//!
//! `UnidbApi<B: Backend>` is generic over the store family:
//! - `UnidbApi<Linear>`: the default vector-backed registry
//! - `UnidbApi<Indexed>`: hash-indexed collections with the same contract

use crate::commands;
use crate::model::{Faculty, RecordId, RecordKind, Student};
use crate::registry::Registry;
use crate::store::{Backend, Linear};

pub struct UnidbApi<B: Backend = Linear> {
    registry: Registry<B>,
}

impl<B: Backend> Default for UnidbApi<B> {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl<B: Backend> UnidbApi<B> {
    pub fn new(registry: Registry<B>) -> Self {
        Self { registry }
    }

    pub fn add_student(&mut self, student: Student) -> CmdResult {
        commands::add::student(&mut self.registry, student)
    }

    pub fn add_faculty(&mut self, faculty: Faculty) -> CmdResult {
        commands::add::faculty(&mut self.registry, faculty)
    }

    pub fn find(&self, kind: RecordKind, id: RecordId) -> CmdResult {
        match kind {
            RecordKind::Student => commands::find::run::<B, Student>(&self.registry, id),
            RecordKind::Faculty => commands::find::run::<B, Faculty>(&self.registry, id),
        }
    }

    pub fn delete(&mut self, kind: RecordKind, id: RecordId) -> CmdResult {
        match kind {
            RecordKind::Student => commands::delete::run::<B, Student>(&mut self.registry, id),
            RecordKind::Faculty => commands::delete::run::<B, Faculty>(&mut self.registry, id),
        }
    }

    pub fn list(&self, kind: RecordKind) -> CmdResult {
        match kind {
            RecordKind::Student => commands::list::run::<B, Student>(&self.registry),
            RecordKind::Faculty => commands::list::run::<B, Faculty>(&self.registry),
        }
    }

    pub fn count(&self, kind: RecordKind) -> CmdResult {
        match kind {
            RecordKind::Student => commands::count::run::<B, Student>(&self.registry),
            RecordKind::Faculty => commands::count::run::<B, Faculty>(&self.registry),
        }
    }

    pub fn load_sample(&mut self) -> CmdResult {
        commands::sample::run(&mut self.registry)
    }

    pub fn clear(&mut self) -> CmdResult {
        commands::clear::run(&mut self.registry)
    }

    pub fn stats(&self) -> CmdResult {
        commands::stats::run(&self.registry)
    }

    pub fn registry(&self) -> &Registry<B> {
        &self.registry
    }
}

pub use crate::commands::stats::AdviseeCount;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RegistryStats};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::{alice, dr_smith};
    use crate::store::Indexed;

    #[test]
    fn dispatches_by_kind() {
        let mut api = UnidbApi::<Linear>::default();
        api.add_student(alice());
        api.add_faculty(dr_smith());

        assert_eq!(api.count(RecordKind::Student).count, Some(1));
        assert_eq!(api.count(RecordKind::Faculty).count, Some(1));
        assert_eq!(
            api.find(RecordKind::Faculty, 101).listed_records[0].name(),
            "Dr. Smith"
        );
        assert!(api.find(RecordKind::Student, 101).has_errors());
    }

    #[test]
    fn delete_targets_requested_collection() {
        let mut api = UnidbApi::<Indexed>::default();
        api.add_student(Student::new(101, "Same Id", "Junior", "Art", 3.0, 101));
        api.add_faculty(dr_smith());

        api.delete(RecordKind::Faculty, 101);
        assert_eq!(api.registry().faculty_count(), 0);
        assert_eq!(api.registry().student_count(), 1);
    }

    #[test]
    fn sample_clear_and_stats() {
        let mut api = UnidbApi::<Linear>::default();
        api.load_sample();
        assert_eq!(api.stats().stats.map(|s| s.student_count), Some(8));

        api.clear();
        assert_eq!(api.list(RecordKind::Student).listed_records.len(), 0);
        assert_eq!(api.list(RecordKind::Faculty).listed_records.len(), 0);
    }
}
