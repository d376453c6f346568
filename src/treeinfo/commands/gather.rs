use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{load_set, InfoStore};

pub fn run<S: InfoStore>(store: &S) -> Result<CmdResult> {
    let set = load_set(store)?;
    let gathered = set.gather();

    let mut result = CmdResult::default();
    if gathered.is_empty() {
        result.add_message(CmdMessage::info("No annotations found."));
    }
    Ok(result.with_gathered(gathered))
}
