use crate::commands::helpers::{edit_holder, normalize_text, save_file};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TreeinfoError};
use crate::paths;
use crate::store::{load_set, InfoStore};

/// Changes the text of the annotation currently in effect for `target`.
pub fn run<S: InfoStore>(store: &S, target: &str, text: &str) -> Result<CmdResult> {
    let text = normalize_text(text)?;
    let target = paths::clean(target);

    let set = load_set(store)?;
    let annotation = set
        .annotation_for(&target)
        .ok_or_else(|| TreeinfoError::Api(format!("No annotation for {}", target)))?;

    let file = edit_holder(store, &annotation, |f| f.update(&annotation.target_path, &text))?;
    save_file(store, &file)?;

    let mut result = CmdResult::default();
    result.written_files.push(file.path().to_string());
    result.add_message(CmdMessage::success(format!(
        "Updated {} in {}",
        target,
        file.path()
    )));
    Ok(result)
}
