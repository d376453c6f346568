use crate::commands::helpers::{edit_holder, save_file};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TreeinfoError};
use crate::paths;
use crate::store::{load_set, InfoStore};

/// Removes the annotation currently in effect for `target`. An info file left
/// without annotations is deleted.
pub fn run<S: InfoStore>(store: &S, target: &str) -> Result<CmdResult> {
    let target = paths::clean(target);

    let set = load_set(store)?;
    let annotation = set
        .annotation_for(&target)
        .ok_or_else(|| TreeinfoError::Api(format!("No annotation for {}", target)))?;

    let file = edit_holder(store, &annotation, |f| f.remove(&annotation.target_path))?;

    let mut result = CmdResult::default();
    if save_file(store, &file)? {
        result.deleted_files.push(file.path().to_string());
    } else {
        result.written_files.push(file.path().to_string());
    }
    result.add_message(CmdMessage::success(format!(
        "Removed annotation for {} from {}",
        target,
        file.path()
    )));
    Ok(result)
}
