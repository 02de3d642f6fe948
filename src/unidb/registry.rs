//! # Registry
//!
//! The in-memory home of every student and faculty record in a session.
//!
//! The registry owns one [`RecordStore`] per collection, built from a
//! [`Backend`]. It is created once at session start and handed by `&mut` to
//! whatever needs it; there is no global instance.
//!
//! ## Semantics
//!
//! - `add_*` always succeeds. Duplicate ids are accepted (logged at debug).
//! - `find_*` and `delete_*` resolve to the earliest-inserted match.
//!   Absence is `None`, never an error.
//! - `students()` / `faculty()` yield records in insertion order and can be
//!   called again for a fresh pass.
//! - Advisor ids on students are not checked against the faculty collection.
//! - `reset()` swaps in fresh, empty stores.

use crate::model::{AnyRecord, Faculty, Record, RecordId, Student};
use crate::store::{Backend, Linear, RecordStore};
use tracing::debug;

pub struct Registry<B: Backend = Linear> {
    students: B::Store<Student>,
    faculty: B::Store<Faculty>,
}

impl<B: Backend> Default for Registry<B> {
    fn default() -> Self {
        Self {
            students: Default::default(),
            faculty: Default::default(),
        }
    }
}

impl<B: Backend> Registry<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) {
        self.add(student);
    }

    pub fn add_faculty(&mut self, faculty: Faculty) {
        self.add(faculty);
    }

    pub fn find_student(&self, id: RecordId) -> Option<&Student> {
        self.find(id)
    }

    pub fn find_faculty(&self, id: RecordId) -> Option<&Faculty> {
        self.find(id)
    }

    /// Removes the first student with `id`. `None` means nothing matched.
    pub fn delete_student(&mut self, id: RecordId) -> Option<Student> {
        self.delete(id)
    }

    /// Removes the first faculty member with `id`. `None` means nothing matched.
    pub fn delete_faculty(&mut self, id: RecordId) -> Option<Faculty> {
        self.delete(id)
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }

    pub fn faculty(&self) -> impl Iterator<Item = &Faculty> + '_ {
        self.faculty.iter()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn faculty_count(&self) -> usize {
        self.faculty.len()
    }

    pub fn reset(&mut self) {
        debug!(
            students = self.students.len(),
            faculty = self.faculty.len(),
            "resetting registry"
        );
        *self = Self::default();
    }

    pub fn add<R: Stored>(&mut self, record: R) {
        let id = record.id();
        if R::store(self).find(id).is_some() {
            debug!(kind = %R::KIND, id, "duplicate id added; lookups resolve to the earlier record");
        }
        R::store_mut(self).insert(record);
        debug!(kind = %R::KIND, id, "record added");
    }

    pub fn find<R: Stored>(&self, id: RecordId) -> Option<&R> {
        R::store(self).find(id)
    }

    pub fn delete<R: Stored>(&mut self, id: RecordId) -> Option<R> {
        let removed = R::store_mut(self).remove(id);
        debug!(kind = %R::KIND, id, removed = removed.is_some(), "delete");
        removed
    }

    pub fn iter<R: Stored>(&self) -> impl Iterator<Item = &R> + '_ {
        R::store(self).iter()
    }

    pub fn count<R: Stored>(&self) -> usize {
        R::store(self).len()
    }
}

/// A record type with a collection of its own in the registry.
pub trait Stored: Record + Into<AnyRecord> + Sized {
    fn store<B: Backend>(registry: &Registry<B>) -> &B::Store<Self>;

    fn store_mut<B: Backend>(registry: &mut Registry<B>) -> &mut B::Store<Self>;
}

impl Stored for Student {
    fn store<B: Backend>(registry: &Registry<B>) -> &B::Store<Self> {
        &registry.students
    }

    fn store_mut<B: Backend>(registry: &mut Registry<B>) -> &mut B::Store<Self> {
        &mut registry.students
    }
}

impl Stored for Faculty {
    fn store<B: Backend>(registry: &Registry<B>) -> &B::Store<Self> {
        &registry.faculty
    }

    fn store_mut<B: Backend>(registry: &mut Registry<B>) -> &mut B::Store<Self> {
        &mut registry.faculty
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn alice() -> Student {
        Student::new(1, "Alice", "Senior", "Computer Science", 3.9, 101)
    }

    pub fn dr_smith() -> Faculty {
        Faculty::new(101, "Dr. Smith", "Professor", "Computer Science")
    }

    pub struct RegistryFixture<B: Backend = Linear> {
        pub registry: Registry<B>,
    }

    impl<B: Backend> Default for RegistryFixture<B> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<B: Backend> RegistryFixture<B> {
        pub fn new() -> Self {
            Self {
                registry: Registry::new(),
            }
        }

        pub fn with_students(mut self, count: i32) -> Self {
            for i in 1..=count {
                self.registry.add_student(Student::new(
                    i,
                    format!("Student {}", i),
                    "Junior",
                    "Physics",
                    3.0,
                    100 + i,
                ));
            }
            self
        }

        pub fn with_faculty(mut self, count: i32) -> Self {
            for i in 1..=count {
                self.registry.add_faculty(Faculty::new(
                    100 + i,
                    format!("Dr. {}", i),
                    "Professor",
                    "Physics",
                ));
            }
            self
        }

        pub fn with_student(mut self, student: Student) -> Self {
            self.registry.add_student(student);
            self
        }

        pub fn with_faculty_member(mut self, faculty: Faculty) -> Self {
            self.registry.add_faculty(faculty);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::store::Indexed;

    fn end_to_end<B: Backend>() {
        let mut registry = Registry::<B>::new();
        registry.add_student(alice());
        registry.add_faculty(dr_smith());

        assert_eq!(registry.find_student(1), Some(&alice()));
        assert_eq!(registry.find_faculty(101), Some(&dr_smith()));
        assert_eq!(registry.student_count(), 1);
        assert_eq!(registry.faculty_count(), 1);

        assert_eq!(registry.delete_student(1), Some(alice()));
        assert!(registry.find_student(1).is_none());
        assert_eq!(registry.student_count(), 0);
        assert_eq!(registry.faculty_count(), 1);
    }

    #[test]
    fn end_to_end_linear() {
        end_to_end::<Linear>();
    }

    #[test]
    fn end_to_end_indexed() {
        end_to_end::<Indexed>();
    }

    fn advisor_not_enforced<B: Backend>() {
        let mut registry = Registry::<B>::new();
        registry.add_student(Student::new(2, "Bob", "Junior", "Mathematics", 3.5, 999));

        assert_eq!(registry.student_count(), 1);
        assert_eq!(registry.find_student(2).map(|s| s.advisor_id), Some(999));
        assert!(registry.find_faculty(999).is_none());
    }

    #[test]
    fn advisor_reference_is_informational() {
        advisor_not_enforced::<Linear>();
        advisor_not_enforced::<Indexed>();
    }

    fn reset_clears<B: Backend>() {
        let mut registry = RegistryFixture::<B>::new()
            .with_students(4)
            .with_faculty(2)
            .registry;
        registry.reset();

        assert_eq!(registry.student_count(), 0);
        assert_eq!(registry.faculty_count(), 0);
        assert_eq!(registry.students().count(), 0);
        assert_eq!(registry.faculty().count(), 0);
    }

    #[test]
    fn reset_clears_both_collections() {
        reset_clears::<Linear>();
        reset_clears::<Indexed>();
    }

    fn listing_order<B: Backend>() {
        let ids = [5, 3, 9, 1, 7];
        let mut registry = Registry::<B>::new();
        for id in ids {
            registry.add_student(Student::new(id, "S", "Freshman", "Art", 2.0, 0));
        }
        let listed: Vec<RecordId> = registry.students().map(|s| s.id).collect();
        assert_eq!(listed, ids);
        // restartable
        assert_eq!(registry.students().count(), ids.len());
    }

    #[test]
    fn lists_in_insertion_order() {
        listing_order::<Linear>();
        listing_order::<Indexed>();
    }

    fn missing_delete<B: Backend>() {
        let mut registry = RegistryFixture::<B>::new().with_students(3).registry;
        assert!(registry.delete_student(404).is_none());
        assert!(registry.delete_faculty(404).is_none());
        assert_eq!(registry.student_count(), 3);
        let ids: Vec<RecordId> = registry.students().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn deleting_unknown_id_is_noop() {
        missing_delete::<Linear>();
        missing_delete::<Indexed>();
    }

    fn duplicate_ids<B: Backend>() {
        let mut registry = Registry::<B>::new();
        registry.add_student(Student::new(1, "Older", "Senior", "Art", 3.0, 0));
        registry.add_student(Student::new(1, "Newer", "Senior", "Art", 3.1, 0));

        assert_eq!(registry.find_student(1).map(|s| s.name.as_str()), Some("Older"));
        registry.delete_student(1);
        assert_eq!(registry.find_student(1).map(|s| s.name.as_str()), Some("Newer"));
        assert_eq!(registry.student_count(), 1);
    }

    #[test]
    fn duplicates_resolve_to_earliest() {
        duplicate_ids::<Linear>();
        duplicate_ids::<Indexed>();
    }

    fn counts_follow_listing<B: Backend>() {
        let mut registry = Registry::<B>::new();
        for step in 0..60 {
            match step % 5 {
                0 | 1 => registry.add_student(Student::new(step % 7, "S", "Junior", "Art", 2.5, 0)),
                2 => registry.add_faculty(Faculty::new(step % 4, "F", "Professor", "Art")),
                3 => {
                    registry.delete_student(step % 7);
                    registry.delete_faculty(step % 4);
                }
                _ if step == 44 => registry.reset(),
                _ => {}
            }
            assert_eq!(registry.student_count(), registry.students().count());
            assert_eq!(registry.faculty_count(), registry.faculty().count());
        }
    }

    #[test]
    fn count_equals_listing_length() {
        counts_follow_listing::<Linear>();
        counts_follow_listing::<Indexed>();
    }

    #[test]
    fn generic_and_named_operations_agree() {
        let mut registry = Registry::<Linear>::new();
        registry.add(alice());
        registry.add(dr_smith());

        assert_eq!(registry.count::<Student>(), registry.student_count());
        assert_eq!(registry.find::<Faculty>(101), registry.find_faculty(101));
        assert_eq!(registry.iter::<Student>().count(), 1);
    }
}
