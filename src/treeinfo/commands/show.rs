use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paths;
use crate::store::{load_set, InfoStore};
use std::collections::BTreeMap;

/// Looks up the annotation in effect for a single path.
pub fn run<S: InfoStore>(store: &S, target: &str) -> Result<CmdResult> {
    let target = paths::clean(target);
    let set = load_set(store)?;

    let mut result = CmdResult::default();
    match set.annotation_for(&target) {
        Some(annotation) => {
            let mut gathered = BTreeMap::new();
            gathered.insert(target, annotation);
            result = result.with_gathered(gathered);
        }
        None => result.add_message(CmdMessage::info(format!("No annotation for {}", target))),
    }
    Ok(result)
}
