use crate::commands::CmdResult;
use crate::registry::{Registry, Stored};
use crate::store::Backend;

pub fn run<B: Backend, R: Stored>(registry: &Registry<B>) -> CmdResult {
    let listed = registry.iter::<R>().cloned().map(Into::into).collect();
    CmdResult::default().with_listed_records(listed)
}
