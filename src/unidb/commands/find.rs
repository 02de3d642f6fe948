use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecordId;
use crate::registry::{Registry, Stored};
use crate::store::Backend;

pub fn run<B: Backend, R: Stored>(registry: &Registry<B>, id: RecordId) -> CmdResult {
    match registry.find::<R>(id) {
        Some(record) => CmdResult::default().with_listed_records(vec![record.clone().into()]),
        None => CmdResult::default().with_message(not_found::<R>(id)),
    }
}

pub(crate) fn not_found<R: Stored>(id: RecordId) -> CmdMessage {
    CmdMessage::error(format!("{} with ID {} not found.", R::KIND, id))
}
