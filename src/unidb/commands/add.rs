use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Faculty, Student};
use crate::registry::{Registry, Stored};
use crate::store::Backend;

pub fn run<B: Backend, R: Stored>(
    registry: &mut Registry<B>,
    record: R,
) -> CmdResult {
    let mut result = CmdResult::default();
    if registry.find::<R>(record.id()).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "{} ID {} is already in use; lookups will return the earlier record.",
            R::KIND,
            record.id()
        )));
    }
    registry.add(record.clone());
    result.add_message(CmdMessage::success(format!(
        "{} added successfully!",
        R::KIND
    )));
    result.with_affected_records(vec![record.into()])
}

pub fn student<B: Backend>(registry: &mut Registry<B>, student: Student) -> CmdResult {
    let advisor_id = student.advisor_id;
    let mut result = run(registry, student);
    if registry.find_faculty(advisor_id).is_none() {
        result.add_message(CmdMessage::warning(format!(
            "Advisor ID {} does not match any faculty member.",
            advisor_id
        )));
    }
    result
}

pub fn faculty<B: Backend>(registry: &mut Registry<B>, faculty: Faculty) -> CmdResult {
    run(registry, faculty)
}
