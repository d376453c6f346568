//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for treeinfo operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (e.g. joining annotation words into one text)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! ## Generic Over InfoStore
//!
//! `InfoApi<S: InfoStore>` is generic over the storage backend:
//! - Production: `InfoApi<FsStore>`
//! - Testing: `InfoApi<MemStore>`

use crate::commands;
use crate::error::Result;
use crate::store::InfoStore;

/// The main API facade for treeinfo operations.
pub struct InfoApi<S: InfoStore> {
    store: S,
}

impl<S: InfoStore> InfoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn gather(&self) -> Result<commands::CmdResult> {
        commands::gather::run(&self.store)
    }

    pub fn validate(&self) -> Result<commands::CmdResult> {
        commands::validate::run(&self.store)
    }

    pub fn clean(&self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::clean::run(&self.store, dry_run)
    }

    pub fn distribute(&self, dry_run: bool) -> Result<commands::CmdResult> {
        commands::distribute::run(&self.store, dry_run)
    }

    pub fn add<T: AsRef<str>>(&self, target: &str, words: &[T]) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, target, &join_words(words))
    }

    pub fn update<T: AsRef<str>>(&self, target: &str, words: &[T]) -> Result<commands::CmdResult> {
        commands::update::run(&self.store, target, &join_words(words))
    }

    pub fn remove(&self, target: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&self.store, target)
    }

    pub fn show(&self, target: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, target)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Annotation text may arrive as several shell words.
fn join_words<T: AsRef<str>>(words: &[T]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemStore;

    fn api() -> InfoApi<MemStore> {
        let store = MemStore::new();
        store.add_path("src/lib.rs");
        store.add_path("README.md");
        InfoApi::new(store)
    }

    #[test]
    fn add_joins_words() {
        let api = api();
        api.add("src/lib.rs", &["library", "root"]).unwrap();
        let shown = api.show("src/lib.rs").unwrap();
        assert_eq!(shown.gathered["src/lib.rs"].text, "library root");
    }

    #[test]
    fn add_update_remove_cycle() {
        let api = api();
        api.add("README.md", &["docs"]).unwrap();
        api.update("README.md", &["project", "docs"]).unwrap();
        assert_eq!(api.gather().unwrap().gathered["README.md"].text, "project docs");

        api.remove("README.md").unwrap();
        assert!(api.gather().unwrap().gathered.is_empty());
        assert!(api.store().find_info_files().unwrap().is_empty());
    }

    #[test]
    fn validate_and_clean_agree() {
        let api = api();
        api.store().put_file(".info", "README.md ok\nmissing.md gone\n");

        let validation = api.validate().unwrap().validation.unwrap();
        assert_eq!(validation.summary.total_issues, 1);

        api.clean(true).unwrap();
        assert_eq!(api.validate().unwrap().validation.unwrap().summary.total_issues, 1);

        api.clean(false).unwrap();
        assert!(api.validate().unwrap().validation.unwrap().is_valid());
    }

    #[test]
    fn distribute_moves_down() {
        let api = api();
        api.store().put_file(".info", "src/lib.rs library\n");
        api.store().put_file("src/.info", "# source\n");

        let result = api.distribute(false).unwrap();
        assert_eq!(result.distribution.unwrap().moved.len(), 1);
        assert_eq!(
            api.store().read_info_file("src/.info").unwrap().as_deref(),
            Some("# source\nlib.rs library\n")
        );
    }
}
