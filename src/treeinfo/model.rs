use crate::paths;
use serde::{Deserialize, Serialize};

/// One `<path> <annotation>` entry read from an info file.
///
/// `target_path` is exactly as written, relative to the directory of
/// `source_file`. Annotations are values: an update produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub target_path: String,
    pub text: String,
    pub source_file: String,
    pub line_number: usize,
}

impl Annotation {
    pub fn new(
        target_path: impl Into<String>,
        text: impl Into<String>,
        source_file: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            text: text.into(),
            source_file: source_file.into(),
            line_number,
        }
    }

    /// Directory of the info file this annotation came from.
    pub fn info_dir(&self) -> String {
        paths::dir(&self.source_file)
    }

    /// The root-relative path this annotation describes.
    pub fn resolved_path(&self) -> String {
        paths::join(&self.info_dir(), &self.target_path)
    }
}
