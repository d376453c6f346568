//! # Storage Layer
//!
//! The [`InfoStore`] trait is the only door between the engine and a real filesystem.
//! Everything above it works on [`InfoFileSet`] values; everything below it knows
//! about directories and bytes.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: production store rooted at a directory
//!   - Discovers info files recursively, skipping configured directories
//!   - Writes atomically (temp file + rename)
//!   - Writing empty content deletes the file
//!
//! - [`memory::MemStore`]: in-memory store for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Paths
//!
//! All paths crossing this boundary are `/`-separated and relative to the store's
//! root, e.g. `.info` or `docs/api/.info`.
//!
//! ## Failure Policy
//!
//! Scanning logs and skips a file it cannot read: one bad file must not hide the
//! rest of the tree. Reading or writing a file that was asked for by name fails
//! hard.

use crate::error::Result;
use crate::info_file::InfoFile;
use crate::set::{InfoFileSet, PathExists};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Abstract interface for info file I/O.
pub trait InfoStore {
    /// Root-relative paths of every info file under the root.
    fn find_info_files(&self) -> Result<Vec<String>>;

    /// Raw content of an info file.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_info_file(&self, path: &str) -> Result<Option<String>>;

    /// Writes an info file. Empty content deletes it.
    fn write_info_file(&self, path: &str, content: &str) -> Result<()>;

    /// Whether a root-relative path exists.
    fn path_exists(&self, path: &str) -> bool;

    /// A predicate answering [`path_exists`](Self::path_exists), detached from the
    /// store so it can live inside an [`InfoFileSet`].
    fn exists_predicate(&self) -> PathExists;

    /// File name used for info files, e.g. `.info`.
    fn info_file_name(&self) -> &str;

    /// Root-relative path of the info file that lives in `dir`.
    fn info_file_path(&self, dir: &str) -> String {
        if dir == "." || dir.is_empty() {
            self.info_file_name().to_string()
        } else {
            format!("{}/{}", dir.trim_end_matches('/'), self.info_file_name())
        }
    }
}

/// Reads every info file under the store's root into a set.
///
/// Files that cannot be read are logged and left out.
pub fn load_set<S: InfoStore + ?Sized>(store: &S) -> Result<InfoFileSet> {
    let mut files = Vec::new();

    for path in store.find_info_files()? {
        match store.read_info_file(&path) {
            Ok(Some(content)) => {
                debug!(path = %path, "loaded info file");
                files.push(InfoFile::parse(path, &content));
            }
            Ok(None) => debug!(path = %path, "info file vanished before it could be read"),
            Err(err) => warn!(path = %path, error = %err, "skipping unreadable info file"),
        }
    }

    Ok(InfoFileSet::new(files, store.exists_predicate()))
}

/// Paths touched by [`write_set`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub deleted: Vec<String>,
}

/// Persists `after`, given the set it was derived from.
///
/// Files that were in `before` but are gone from `after` are deleted. Files in
/// `after` are written when they changed; the ones left without annotations are
/// deleted instead.
pub fn write_set<S: InfoStore + ?Sized>(
    store: &S,
    before: &InfoFileSet,
    after: &InfoFileSet,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();
    let remaining: BTreeSet<String> = after.paths().into_iter().collect();

    for path in before.paths() {
        if !remaining.contains(&path) {
            store.write_info_file(&path, "")?;
            debug!(path = %path, "deleted info file");
            report.deleted.push(path);
        }
    }

    for file in after.files() {
        if file.is_empty() {
            if before.file(file.path()).is_some() {
                store.write_info_file(file.path(), "")?;
                debug!(path = %file.path(), "deleted empty info file");
                report.deleted.push(file.path().to_string());
            }
        } else if file.is_modified() {
            store.write_info_file(file.path(), &file.serialize())?;
            debug!(path = %file.path(), "wrote info file");
            report.written.push(file.path().to_string());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::memory::MemStore;
    use super::*;

    #[test]
    fn info_file_path_for_dirs() {
        let store = MemStore::new();
        assert_eq!(store.info_file_path("."), ".info");
        assert_eq!(store.info_file_path("a/b"), "a/b/.info");
        assert_eq!(store.info_file_path("a/b/"), "a/b/.info");
    }

    #[test]
    fn load_skips_unreadable_files() {
        let store = MemStore::new();
        store.put_file(".info", "a.txt note\n");
        store.put_file("sub/.info", "b.txt note\n");
        store.set_unreadable("sub/.info");

        let set = load_set(&store).unwrap();
        assert_eq!(set.paths(), vec![".info"]);
    }

    #[test]
    fn write_set_only_touches_changed_files() {
        let store = MemStore::new();
        store.put_file(".info", "a.txt a\n");
        store.put_file("x/.info", "gone.txt g\n");
        store.put_file("y/.info", "b.txt b\n");
        store.add_path("a.txt");
        store.add_path("y/b.txt");

        let before = load_set(&store).unwrap();
        let (cleaned, _) = before.clean();
        let after = cleaned.remove_empty();

        let report = write_set(&store, &before, &after).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.deleted, vec!["x/.info"]);
        assert_eq!(store.read_info_file("x/.info").unwrap(), None);
        assert_eq!(
            store.read_info_file(".info").unwrap().as_deref(),
            Some("a.txt a\n")
        );
    }

    #[test]
    fn write_set_deletes_files_left_empty() {
        let store = MemStore::new();
        store.put_file(".info", "gone.txt g\n");

        let before = load_set(&store).unwrap();
        let (cleaned, _) = before.clean();

        let report = write_set(&store, &before, &cleaned).unwrap();
        assert_eq!(report.deleted, vec![".info"]);
        assert!(store.find_info_files().unwrap().is_empty());
    }

    #[test]
    fn write_errors_propagate() {
        let store = MemStore::new();
        store.put_file(".info", "gone.txt g\n");
        let before = load_set(&store).unwrap();
        let (cleaned, _) = before.clean();

        store.set_simulate_write_error(true);
        assert!(write_set(&store, &before, &cleaned).is_err());
    }
}
