use super::InfoStore;
use crate::error::{Result, TreeinfoError};
use crate::paths;
use crate::set::PathExists;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};
use uuid::Uuid;
use walkdir::WalkDir;

/// File-backed store rooted at a directory.
pub struct FsStore {
    root: PathBuf,
    info_file_name: String,
    skip_dirs: Vec<String>,
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = paths::clean(path);
    if path == "." {
        root.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Paths that climb out of the root never exist as far as the tree is concerned.
fn exists_under(root: &Path, path: &str) -> bool {
    let path = paths::clean(path);
    if path == ".." || path.starts_with("../") || path.starts_with('/') {
        return false;
    }
    resolve(root, &path).exists()
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            info_file_name: ".info".to_string(),
            skip_dirs: vec![".git".to_string()],
        }
    }

    pub fn with_info_file_name(mut self, name: &str) -> Self {
        self.info_file_name = name.to_string();
        self
    }

    /// Directory names never descended into during discovery.
    pub fn with_skip_dirs(mut self, dirs: Vec<String>) -> Self {
        self.skip_dirs = dirs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let rel = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(paths::clean(&parts.join("/")))
    }
}

impl InfoStore for FsStore {
    fn find_info_files(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(TreeinfoError::Store(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self
                        .skip_dirs
                        .iter()
                        .any(|skip| entry.file_name().to_string_lossy() == skip.as_str())
            });

        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable path during scan");
                    continue;
                }
            };
            if !entry.file_type().is_file() || entry.file_name().to_string_lossy() != self.info_file_name {
                continue;
            }
            if let Some(rel) = self.relative(entry.path()) {
                debug!(path = %rel, "found info file");
                found.push(rel);
            }
        }

        found.sort();
        Ok(found)
    }

    fn read_info_file(&self, path: &str) -> Result<Option<String>> {
        match fs::read_to_string(resolve(&self.root, path)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TreeinfoError::Io(err)),
        }
    }

    fn write_info_file(&self, path: &str, content: &str) -> Result<()> {
        let target = resolve(&self.root, path);

        if content.is_empty() {
            return match fs::remove_file(&target) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(TreeinfoError::Io(err)),
            };
        }

        let parent = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(TreeinfoError::Io)?;
        }

        // Atomic write
        let tmp_path = parent.join(format!(".{}-{}.tmp", self.info_file_name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(TreeinfoError::Io)?;
        fs::rename(&tmp_path, &target).map_err(TreeinfoError::Io)?;

        Ok(())
    }

    fn path_exists(&self, path: &str) -> bool {
        exists_under(&self.root, path)
    }

    fn exists_predicate(&self) -> PathExists {
        let root = self.root.clone();
        Rc::new(move |path: &str| exists_under(&root, path))
    }

    fn info_file_name(&self) -> &str {
        &self.info_file_name
    }
}
