use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{load_set, write_set, InfoStore};

/// Removes invalid, duplicate and conflicting entries, then drops info files left
/// without annotations. With `dry_run` nothing is written.
pub fn run<S: InfoStore>(store: &S, dry_run: bool) -> Result<CmdResult> {
    let before = load_set(store)?;
    let (cleaned, report) = before.clean();
    let after = cleaned.remove_empty();
    let mut result = CmdResult::default();

    if report.is_noop() {
        result.add_message(CmdMessage::success("Nothing to clean."));
        return Ok(result.with_clean(report));
    }

    let summary = &report.summary;
    result.add_message(CmdMessage::warning(if dry_run {
        "Would clean:"
    } else {
        "Cleaned:"
    }));
    if summary.invalid_paths_removed > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - {} annotation(s) pointing at missing or parent paths",
            summary.invalid_paths_removed
        )));
    }
    if summary.duplicates_removed > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - {} duplicate or overridden annotation(s)",
            summary.duplicates_removed
        )));
    }
    if summary.malformed_lines_removed > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - {} malformed line(s)",
            summary.malformed_lines_removed
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "  in {} info file(s)",
        summary.files_modified
    )));

    if !dry_run {
        result.record_writes(write_set(store, &before, &after)?);
    }

    Ok(result.with_clean(report))
}
