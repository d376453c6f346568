use crate::commands::helpers::{normalize_target, normalize_text};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::info_file::InfoFile;
use crate::paths;
use crate::store::InfoStore;

/// Annotates `target` in the info file of the directory that contains it.
pub fn run<S: InfoStore>(store: &S, target: &str, text: &str) -> Result<CmdResult> {
    let text = normalize_text(text)?;
    let target = normalize_target(store, target)?;

    let (dir, local) = if target == "." {
        (".".to_string(), ".".to_string())
    } else {
        (paths::dir(&target), paths::base(&target))
    };
    let info_path = store.info_file_path(&dir);

    let mut file = match store.read_info_file(&info_path)? {
        Some(content) => InfoFile::parse(info_path.as_str(), &content),
        None => InfoFile::new(info_path.as_str()),
    };

    let mut result = CmdResult::default();
    if !file.add(&local, &text) {
        result.add_message(CmdMessage::warning(format!(
            "{} is already annotated in {}. Use `update` to change it.",
            target, info_path
        )));
        return Ok(result);
    }

    store.write_info_file(&info_path, &file.serialize())?;
    result.written_files.push(info_path.clone());
    result.add_message(CmdMessage::success(format!(
        "Annotated {} in {}",
        target, info_path
    )));
    Ok(result)
}
