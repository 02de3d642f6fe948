use crate::commands::CmdResult;
use crate::registry::{Registry, Stored};
use crate::store::Backend;

pub fn run<B: Backend, R: Stored>(registry: &Registry<B>) -> CmdResult {
    CmdResult::default().with_count(registry.count::<R>())
}
