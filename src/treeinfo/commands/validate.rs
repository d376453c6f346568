use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{load_set, InfoStore};

pub fn run<S: InfoStore>(store: &S) -> Result<CmdResult> {
    let set = load_set(store)?;
    let validation = set.validate();
    let mut result = CmdResult::default();

    if validation.is_valid() {
        result.add_message(CmdMessage::success(format!(
            "All {} info file(s) are valid.",
            validation.summary.total_files
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Found {} issue(s) in {} of {} info file(s).",
            validation.summary.total_issues,
            validation.summary.invalid_files,
            validation.summary.total_files
        )));
    }

    Ok(result.with_validation(validation))
}
