use super::InfoStore;
use crate::error::{Result, TreeinfoError};
use crate::paths;
use crate::set::PathExists;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

const DEFAULT_INFO_FILE: &str = ".info";

/// In-memory store for testing.
///
/// Uses `RefCell` for interior mutability since treeinfo is single-threaded.
/// This keeps the `InfoStore` trait on `&self` without paying for locks.
///
/// Putting a file or path also makes all of its parent directories exist.
pub struct MemStore {
    info_file_name: String,
    files: RefCell<BTreeMap<String, String>>,
    paths: RefCell<BTreeSet<String>>,
    unreadable: RefCell<BTreeSet<String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self {
            info_file_name: DEFAULT_INFO_FILE.to_string(),
            files: RefCell::new(BTreeMap::new()),
            paths: RefCell::new(BTreeSet::new()),
            unreadable: RefCell::new(BTreeSet::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info_file_name(mut self, name: &str) -> Self {
        self.info_file_name = name.to_string();
        self
    }

    /// Registers `path` and every directory above it as existing.
    pub fn add_path(&self, path: &str) {
        let mut current = paths::clean(path);
        let mut existing = self.paths.borrow_mut();
        while current != "." && !current.starts_with("..") {
            let parent = paths::dir(&current);
            existing.insert(current);
            current = parent;
        }
    }

    /// Stores an info file (and makes its directory exist).
    pub fn put_file(&self, path: &str, content: &str) {
        self.add_path(path);
        self.files
            .borrow_mut()
            .insert(paths::clean(path), content.to_string());
    }

    /// Makes reads of `path` fail with an I/O-like error.
    pub fn set_unreadable(&self, path: &str) {
        self.unreadable.borrow_mut().insert(paths::clean(path));
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl InfoStore for MemStore {
    fn find_info_files(&self) -> Result<Vec<String>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_info_file(&self, path: &str) -> Result<Option<String>> {
        let path = paths::clean(path);
        if self.unreadable.borrow().contains(&path) {
            return Err(TreeinfoError::Store(format!(
                "Simulated read error: {}",
                path
            )));
        }
        Ok(self.files.borrow().get(&path).cloned())
    }

    fn write_info_file(&self, path: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TreeinfoError::Store("Simulated write error".to_string()));
        }
        if content.is_empty() {
            let path = paths::clean(path);
            self.files.borrow_mut().remove(&path);
            self.paths.borrow_mut().remove(&path);
        } else {
            self.put_file(path, content);
        }
        Ok(())
    }

    fn path_exists(&self, path: &str) -> bool {
        let path = paths::clean(path);
        path == "." || self.paths.borrow().contains(&path)
    }

    fn exists_predicate(&self) -> PathExists {
        let snapshot = self.paths.borrow().clone();
        Rc::new(move |path: &str| {
            let path = paths::clean(path);
            path == "." || snapshot.contains(&path)
        })
    }

    fn info_file_name(&self) -> &str {
        &self.info_file_name
    }
}
