//! # Configuration
//!
//! Treeinfo configuration is loaded with [`confique`], layering TOML files,
//! environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **CLI flags**: `--info-file` (applied by the CLI on top of the loaded config).
//! 2. **Environment variables**: `TREEINFO_INFO_FILE`.
//! 3. **Project Config**: `<root>/.treeinfo.toml` in the annotated tree.
//! 4. **Global Config**: `treeinfo.toml` in the OS config directory (via `directories`).
//! 5. **Compiled Defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `info_file` | `.info` | Name of the files holding annotations |
//! | `skip_dirs` | `[".git"]` | Directory names never scanned for info files |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = ".treeinfo.toml";
pub const GLOBAL_CONFIG_FILE: &str = "treeinfo.toml";

/// Configuration for treeinfo.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeinfoConfig {
    /// Name of the info files to look for (e.g. ".info", ".notes")
    #[config(env = "TREEINFO_INFO_FILE", default = ".info")]
    pub info_file: String,

    /// Directory names that are never descended into while scanning.
    #[config(default = [".git"])]
    pub skip_dirs: Vec<String>,
}

impl Default for TreeinfoConfig {
    fn default() -> Self {
        Self {
            info_file: ".info".to_string(),
            skip_dirs: vec![".git".to_string()],
        }
    }
}

impl TreeinfoConfig {
    /// Loads configuration for the tree at `root`. Missing files are fine.
    pub fn load(root: &Path, global_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(root.join(PROJECT_CONFIG_FILE));
        if let Some(dir) = global_dir {
            builder = builder.file(dir.join(GLOBAL_CONFIG_FILE));
        }
        Ok(builder.load()?)
    }

    /// OS-appropriate directory for the global config file.
    pub fn global_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "treeinfo", "treeinfo").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Overrides the info file name when a non-empty one is given.
    pub fn with_info_file(mut self, name: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.info_file = name;
        }
        self
    }
}
