use crate::commands::{CmdMessage, CmdResult};
use crate::registry::Registry;
use crate::store::Backend;

pub fn run<B: Backend>(registry: &mut Registry<B>) -> CmdResult {
    let dropped = registry.student_count() + registry.faculty_count();
    registry.reset();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Database cleared."));
    if dropped > 0 {
        result.add_message(CmdMessage::info(format!("{} records removed.", dropped)));
    }
    result
}
