use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{load_set, write_set, InfoStore};

/// Moves each annotation into the info file closest to what it describes.
pub fn run<S: InfoStore>(store: &S, dry_run: bool) -> Result<CmdResult> {
    let before = load_set(store)?;
    let (after, report) = before.distribute();
    let mut result = CmdResult::default();

    if report.is_noop() {
        result.add_message(CmdMessage::success(
            "Annotations are already in their closest info files.",
        ));
        return Ok(result.with_distribution(report));
    }

    let verb = if dry_run { "Would move" } else { "Moved" };
    for relocation in &report.moved {
        result.add_message(CmdMessage::info(format!(
            "{} {} ({}) -> {} ({})",
            verb,
            relocation.annotation.target_path,
            relocation.annotation.source_file,
            relocation.to_path,
            relocation.to_file
        )));
    }
    for dropped in &report.dropped {
        result.add_message(CmdMessage::warning(format!(
            "{} {} ({}): a closer info file already annotates it",
            if dry_run { "Would drop" } else { "Dropped" },
            dropped.target_path,
            dropped.source_file
        )));
    }

    if !dry_run {
        result.record_writes(write_set(store, &before, &after)?);
    }

    Ok(result.with_distribution(report))
}
