use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecordId;
use crate::registry::{Registry, Stored};
use crate::store::Backend;

use super::find::not_found;

pub fn run<B: Backend, R: Stored>(registry: &mut Registry<B>, id: RecordId) -> CmdResult {
    let Some(removed) = registry.delete::<R>(id) else {
        return CmdResult::default().with_message(not_found::<R>(id));
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} deleted successfully ({}): {}",
        R::KIND,
        id,
        removed.name()
    )));
    if registry.find::<R>(id).is_some() {
        result.add_message(CmdMessage::info(format!(
            "Another {} with ID {} remains.",
            R::KIND.to_string().to_lowercase(),
            id
        )));
    }
    result.with_affected_records(vec![removed.into()])
}
