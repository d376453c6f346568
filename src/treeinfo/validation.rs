//! Issue and report types produced by [`InfoFileSet::validate`] and
//! [`InfoFileSet::clean`].
//!
//! Problems with info files are data, not errors: a broken line or a dangling path
//! never aborts an operation, it shows up here.
//!
//! [`InfoFileSet::validate`]: crate::set::InfoFileSet::validate
//! [`InfoFileSet::clean`]: crate::set::InfoFileSet::clean

use crate::model::Annotation;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A line that could not be parsed.
    InvalidFormat,
    /// A path annotated twice in the same file.
    DuplicatePath,
    /// The annotated path does not exist.
    PathNotExists,
    /// The annotation points at its own directory or one of its parents.
    AncestorPath,
    /// Another info file holds the winning annotation for the same target.
    MultipleFiles,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::InvalidFormat => "invalid format",
            IssueKind::DuplicatePath => "duplicate path",
            IssueKind::PathNotExists => "path not found",
            IssueKind::AncestorPath => "ancestor path",
            IssueKind::MultipleFiles => "multiple files",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub info_file: String,
    pub line_number: usize,
    /// The path as written in the info file. Empty for lines that never parsed.
    pub target_path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub total_issues: usize,
    pub by_kind: BTreeMap<IssueKind, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
    pub valid_files: Vec<String>,
    pub invalid_files: Vec<String>,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// Splits `files` into valid and invalid ones: any file named by an issue is
    /// invalid. Both lists come out sorted.
    pub fn from_issues<I, S>(files: I, issues: Vec<ValidationIssue>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all: BTreeSet<String> = files.into_iter().map(Into::into).collect();
        let invalid: BTreeSet<String> = issues.iter().map(|i| i.info_file.clone()).collect();

        let valid_files: Vec<String> = all.difference(&invalid).cloned().collect();
        let invalid_files: Vec<String> = invalid.into_iter().collect();

        let mut by_kind = BTreeMap::new();
        for issue in &issues {
            *by_kind.entry(issue.kind).or_insert(0) += 1;
        }

        let summary = ValidationSummary {
            total_files: valid_files.len() + invalid_files.len(),
            valid_files: valid_files.len(),
            invalid_files: invalid_files.len(),
            total_issues: issues.len(),
            by_kind,
        };

        Self {
            issues,
            valid_files,
            invalid_files,
            summary,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for<'a>(&'a self, info_file: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.info_file == info_file)
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.summary.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    /// Annotations pointing at missing paths or at ancestors of their file.
    pub invalid_paths_removed: usize,
    /// Repeated paths within a file and losers of cross-file conflicts.
    pub duplicates_removed: usize,
    /// Lines that never parsed.
    pub malformed_lines_removed: usize,
    pub files_modified: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanResult {
    pub removed_annotations: Vec<Annotation>,
    pub updated_files: Vec<String>,
    pub summary: CleanSummary,
}

impl CleanResult {
    pub fn is_noop(&self) -> bool {
        self.updated_files.is_empty()
    }
}
