//! # Info File Sets
//!
//! An [`InfoFileSet`] is every info file found under a root, plus the one question the
//! engine ever asks the outside world: does this path exist? That predicate is captured
//! when the set is built, so all operations here are pure.
//!
//! Operations take `&self` and hand back new values. The set they were called on is
//! never changed, which makes pipelines like
//! `clean → distribute → remove_empty → validate` trivially safe to compose.
//!
//! ## Precedence
//!
//! When several annotations resolve to the same target, the winner is chosen by:
//!
//! 1. smallest [`paths::distance`] from the annotation's info directory to the
//!    target's directory,
//! 2. lexicographically smaller info directory,
//! 3. smaller line number.
//!
//! Annotations that point at their own directory (other than via `.`) or at a parent
//! directory, and annotations whose target does not exist, never compete.

use crate::info_file::{InfoFile, LineKind};
use crate::model::Annotation;
use crate::parser::LineError;
use crate::paths;
use crate::validation::{CleanResult, IssueKind, ValidationIssue, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

/// The "does this path exist" predicate. Paths are root-relative.
pub type PathExists = Rc<dyn Fn(&str) -> bool>;

#[derive(Clone)]
pub struct InfoFileSet {
    files: Vec<InfoFile>,
    path_exists: PathExists,
}

impl fmt::Debug for InfoFileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoFileSet")
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}

/// An annotation that competes for a target.
#[derive(Debug, Clone)]
struct Candidate {
    annotation: Annotation,
    resolved: String,
    info_dir: String,
}

impl Candidate {
    fn new(annotation: Annotation) -> Self {
        Self {
            resolved: annotation.resolved_path(),
            info_dir: annotation.info_dir(),
            annotation,
        }
    }

    fn precedence(&self) -> (usize, &str, usize) {
        (
            paths::distance(&self.info_dir, &paths::dir(&self.resolved)),
            self.info_dir.as_str(),
            self.annotation.line_number,
        )
    }

    fn is_ancestor_reference(&self) -> bool {
        paths::is_ancestor_reference(&self.annotation.target_path, &self.resolved, &self.info_dir)
    }
}

fn winner_index(candidates: &[Candidate]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.precedence().cmp(&b.precedence()))
        .map(|(i, _)| i)
}

/// One annotation moved by [`InfoFileSet::distribute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    /// The annotation as it was before the move.
    pub annotation: Annotation,
    pub to_file: String,
    /// The annotation's path, relative to `to_file`'s directory.
    pub to_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributeResult {
    pub moved: Vec<Relocation>,
    /// Annotations whose destination already annotated the same target.
    pub dropped: Vec<Annotation>,
    /// Files that lost their last annotation and were dropped from the set.
    pub emptied_files: Vec<String>,
}

impl DistributeResult {
    pub fn is_noop(&self) -> bool {
        self.moved.is_empty() && self.dropped.is_empty()
    }
}

impl InfoFileSet {
    pub fn new(mut files: Vec<InfoFile>, path_exists: PathExists) -> Self {
        files.sort_by(|a, b| a.path().cmp(b.path()));
        Self { files, path_exists }
    }

    pub fn with_predicate<F>(files: Vec<InfoFile>, path_exists: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self::new(files, Rc::new(path_exists))
    }

    fn with_files(&self, files: Vec<InfoFile>) -> Self {
        Self::new(files, Rc::clone(&self.path_exists))
    }

    pub fn files(&self) -> &[InfoFile] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&InfoFile> {
        self.files.iter().find(|f| f.path() == path)
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.iter().map(|f| f.path().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn path_exists(&self, path: &str) -> bool {
        (self.path_exists)(path)
    }

    /// Every annotation in the set, file by file, in file order.
    pub fn annotations(&self) -> Vec<Annotation> {
        self.files.iter().flat_map(|f| f.annotations()).collect()
    }

    /// The effective annotation for every annotated target, keyed by the
    /// root-relative target path.
    pub fn gather(&self) -> BTreeMap<String, Annotation> {
        let mut groups: BTreeMap<String, Vec<Candidate>> = BTreeMap::new();

        for annotation in self.annotations() {
            let candidate = Candidate::new(annotation);
            if candidate.is_ancestor_reference() || !self.path_exists(&candidate.resolved) {
                continue;
            }
            groups
                .entry(candidate.resolved.clone())
                .or_default()
                .push(candidate);
        }

        groups
            .into_iter()
            .filter_map(|(target, mut candidates)| {
                let winner = winner_index(&candidates)?;
                Some((target, candidates.swap_remove(winner).annotation))
            })
            .collect()
    }

    /// The effective annotation for one root-relative path, if any.
    pub fn annotation_for(&self, target: &str) -> Option<Annotation> {
        self.gather().remove(&paths::clean(target))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut issues = Vec::new();
        let mut competing: BTreeMap<String, Vec<Candidate>> = BTreeMap::new();

        for file in &self.files {
            for line in file.lines() {
                match &line.kind {
                    LineKind::Malformed(LineError::Removed) => {}
                    LineKind::Malformed(LineError::DuplicatePath { path, .. }) => {
                        let first = file.get(path).map(|a| a.line_number).unwrap_or(0);
                        issues.push(ValidationIssue {
                            kind: IssueKind::DuplicatePath,
                            info_file: file.path().to_string(),
                            line_number: line.number,
                            target_path: path.clone(),
                            message: format!(
                                "'{}' is already annotated on line {} (first occurrence wins)",
                                path, first
                            ),
                            related_file: None,
                        });
                    }
                    LineKind::Malformed(err) => issues.push(ValidationIssue {
                        kind: IssueKind::InvalidFormat,
                        info_file: file.path().to_string(),
                        line_number: line.number,
                        target_path: String::new(),
                        message: format!("{}: {}", err, line.raw.trim()),
                        related_file: None,
                    }),
                    LineKind::Annotation { path, .. } => {
                        let Some(annotation) = file.get(path) else {
                            continue;
                        };
                        let candidate = Candidate::new(annotation);
                        let mut ok = true;

                        if !self.path_exists(&candidate.resolved) {
                            ok = false;
                            issues.push(ValidationIssue {
                                kind: IssueKind::PathNotExists,
                                info_file: file.path().to_string(),
                                line_number: line.number,
                                target_path: path.clone(),
                                message: format!("path '{}' does not exist", candidate.resolved),
                                related_file: None,
                            });
                        }
                        if candidate.is_ancestor_reference() {
                            ok = false;
                            issues.push(ValidationIssue {
                                kind: IssueKind::AncestorPath,
                                info_file: file.path().to_string(),
                                line_number: line.number,
                                target_path: path.clone(),
                                message: format!(
                                    "'{}' resolves to '{}', which contains this info file",
                                    path, candidate.resolved
                                ),
                                related_file: None,
                            });
                        }
                        if ok {
                            competing
                                .entry(candidate.resolved.clone())
                                .or_default()
                                .push(candidate);
                        }
                    }
                    LineKind::Blank | LineKind::Comment => {}
                }
            }
        }

        for (target, candidates) in &competing {
            if candidates.len() < 2 {
                continue;
            }
            let Some(winner) = winner_index(candidates) else {
                continue;
            };
            let winner_file = &candidates[winner].annotation.source_file;

            for (i, loser) in candidates.iter().enumerate() {
                if i == winner {
                    continue;
                }
                issues.push(ValidationIssue {
                    kind: IssueKind::MultipleFiles,
                    info_file: loser.annotation.source_file.clone(),
                    line_number: loser.annotation.line_number,
                    target_path: loser.annotation.target_path.clone(),
                    message: format!(
                        "'{}' is also annotated in {}, which takes precedence",
                        target, winner_file
                    ),
                    related_file: Some(winner_file.clone()),
                });
            }
        }

        ValidationResult::from_issues(self.paths(), issues)
    }

    /// Removes everything [`validate`](Self::validate) complains about.
    ///
    /// Every annotation named by an issue is removed, including the first
    /// occurrence of a path that is repeated within one file. Unparseable and
    /// duplicate lines are retired so they are not written back.
    pub fn clean(&self) -> (Self, CleanResult) {
        let validation = self.validate();
        let mut files = self.files.clone();
        let mut result = CleanResult::default();
        let mut touched = BTreeSet::new();

        for issue in &validation.issues {
            let Some(file) = files.iter_mut().find(|f| f.path() == issue.info_file) else {
                continue;
            };

            match issue.kind {
                IssueKind::InvalidFormat => {
                    if file.remove_line(issue.line_number) {
                        result.summary.malformed_lines_removed += 1;
                        touched.insert(issue.info_file.clone());
                    }
                }
                IssueKind::DuplicatePath => {
                    if let Some(annotation) = file.get(&issue.target_path) {
                        if file.remove(&issue.target_path) {
                            result.summary.duplicates_removed += 1;
                            result.removed_annotations.push(annotation);
                            touched.insert(issue.info_file.clone());
                        }
                    }
                    if file.remove_line(issue.line_number) {
                        result.summary.duplicates_removed += 1;
                        touched.insert(issue.info_file.clone());
                    }
                }
                IssueKind::PathNotExists | IssueKind::AncestorPath | IssueKind::MultipleFiles => {
                    if issue.target_path.is_empty() {
                        continue;
                    }
                    let Some(annotation) = file.get(&issue.target_path) else {
                        continue;
                    };
                    if !file.remove(&issue.target_path) {
                        continue;
                    }
                    if issue.kind == IssueKind::MultipleFiles {
                        result.summary.duplicates_removed += 1;
                    } else {
                        result.summary.invalid_paths_removed += 1;
                    }
                    result.removed_annotations.push(annotation);
                    touched.insert(issue.info_file.clone());
                }
            }
        }

        result.updated_files = touched.into_iter().collect();
        result.summary.files_modified = result.updated_files.len();
        (self.with_files(files), result)
    }

    /// Moves every annotation into the info file closest to its target.
    ///
    /// The closest file wins, and among equally close files the smaller directory
    /// wins, even over the file already holding the annotation. Files left without
    /// annotations are dropped. Targets above the root stay where they are.
    pub fn distribute(&self) -> (Self, DistributeResult) {
        let mut files = self.files.clone();
        let dirs: Vec<String> = files.iter().map(|f| f.dir()).collect();
        let mut result = DistributeResult::default();

        let snapshot: Vec<(usize, Annotation)> = files
            .iter()
            .enumerate()
            .flat_map(|(i, f)| f.annotations().into_iter().map(move |a| (i, a)))
            .collect();

        for (holder, annotation) in snapshot {
            let resolved = annotation.resolved_path();
            if resolved == ".." || resolved.starts_with("../") {
                continue;
            }
            let target_dir = paths::dir(&resolved);
            let distance_from = |i: usize| paths::distance(&dirs[i], &target_dir);

            let Some(chosen) = (0..files.len())
                .min_by(|&a, &b| (distance_from(a), &dirs[a]).cmp(&(distance_from(b), &dirs[b])))
            else {
                continue;
            };
            if chosen == holder {
                continue;
            }
            let Some(to_path) = paths::rel(&dirs[chosen], &resolved) else {
                continue;
            };

            files[holder].remove(&annotation.target_path);
            if files[chosen].add(&to_path, &annotation.text) {
                result.moved.push(Relocation {
                    annotation,
                    to_file: files[chosen].path().to_string(),
                    to_path,
                });
            } else {
                result.dropped.push(annotation);
            }
        }

        result.emptied_files = files
            .iter()
            .zip(&self.files)
            .filter(|(after, before)| after.is_empty() && !before.is_empty())
            .map(|(after, _)| after.path().to_string())
            .collect();

        (self.with_files(files).remove_empty(), result)
    }

    /// Drops files that hold no annotations.
    pub fn remove_empty(&self) -> Self {
        self.with_files(
            self.files
                .iter()
                .filter(|f| !f.is_empty())
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(files: &[(&str, &str)], existing: &[&str]) -> InfoFileSet {
        let existing: HashSet<String> = existing.iter().map(|s| s.to_string()).collect();
        InfoFileSet::with_predicate(
            files
                .iter()
                .map(|(path, content)| InfoFile::parse(*path, content))
                .collect(),
            move |p| p == "." || existing.contains(p),
        )
    }

    fn contents(set: &InfoFileSet) -> Vec<(String, String)> {
        set.files()
            .iter()
            .map(|f| (f.path().to_string(), f.serialize()))
            .collect()
    }

    #[test]
    fn deeper_file_wins() {
        let s = set(
            &[(".info", "sub/d.txt  from root\n"), ("sub/.info", "d.txt  from sub\n")],
            &["sub", "sub/d.txt"],
        );
        let gathered = s.gather();
        assert_eq!(gathered.len(), 1);
        let winner = &gathered["sub/d.txt"];
        assert_eq!(winner.text, "from sub");
        assert_eq!(winner.source_file, "sub/.info");
    }

    #[test]
    fn sibling_tie_breaks_lexicographically() {
        let files = [
            ("sub_b/.info", "../target.txt from b\n"),
            ("sub_a/.info", "../target.txt from a\n"),
        ];
        let existing = ["sub_a", "sub_b", "target.txt"];
        for _ in 0..5 {
            let gathered = set(&files, &existing).gather();
            assert_eq!(gathered["target.txt"].source_file, "sub_a/.info");
            assert_eq!(gathered["target.txt"].text, "from a");
        }
    }

    #[test]
    fn same_file_tie_breaks_on_line_number() {
        let s = set(&[(".info", "./a.txt second form\na.txt first form\n")], &["a.txt"]);
        assert_eq!(s.gather()["a.txt"].line_number, 1);
        assert_eq!(s.gather()["a.txt"].text, "second form");
    }

    #[test]
    fn ancestor_target_is_excluded_and_reported() {
        let s = set(&[("sub/d/.info", "../.. the root\n")], &["sub", "sub/d"]);
        assert!(s.gather().is_empty());

        let result = s.validate();
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::AncestorPath);
        assert_eq!(result.issues[0].target_path, "../..");
        assert_eq!(result.invalid_files, vec!["sub/d/.info"]);
    }

    #[test]
    fn dot_is_an_allowed_self_reference() {
        let s = set(&[("sub/.info", ". the sub directory\n")], &["sub"]);
        assert!(s.validate().is_valid());
        assert_eq!(s.gather()["sub"].text, "the sub directory");
    }

    #[test]
    fn self_reference_through_longer_path_is_rejected() {
        let s = set(&[("sub/.info", "../sub the sub directory\n")], &["sub"]);
        assert!(s.gather().is_empty());
        let result = s.validate();
        assert_eq!(result.count(IssueKind::AncestorPath), 1);
    }

    #[test]
    fn missing_targets_are_skipped_and_reported() {
        let s = set(&[(".info", "here.txt yes\ngone.txt no\n")], &["here.txt"]);
        let gathered = s.gather();
        assert!(gathered.contains_key("here.txt"));
        assert!(!gathered.contains_key("gone.txt"));

        let result = s.validate();
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::PathNotExists);
        assert_eq!(result.issues[0].line_number, 2);
    }

    #[test]
    fn malformed_and_duplicate_lines_are_reported() {
        let s = set(&[(".info", "a.txt X\nbroken\na.txt Y\n")], &["a.txt"]);
        let result = s.validate();
        let kinds: Vec<_> = result.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::InvalidFormat, IssueKind::DuplicatePath]);
        assert_eq!(result.issues[0].line_number, 2);
        assert!(result.issues[0].target_path.is_empty());
        assert_eq!(result.issues[1].target_path, "a.txt");
        assert!(result.issues[1].message.contains("line 1"));
    }

    #[test]
    fn cross_file_conflict_names_the_winner() {
        let s = set(
            &[
                (".info", "sub/d.txt from root\nother.txt fine\n"),
                ("sub/.info", "d.txt from sub\n"),
            ],
            &["sub", "sub/d.txt", "other.txt"],
        );
        let result = s.validate();
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.kind, IssueKind::MultipleFiles);
        assert_eq!(issue.info_file, ".info");
        assert_eq!(issue.related_file.as_deref(), Some("sub/.info"));
        assert_eq!(result.invalid_files, vec![".info"]);
        assert_eq!(result.valid_files, vec!["sub/.info"]);
    }

    #[test]
    fn invalid_candidates_do_not_conflict() {
        let s = set(
            &[(".info", "sub/d.txt from root\n"), ("sub/.info", "d.txt from sub\n")],
            &["sub"],
        );
        let result = s.validate();
        assert_eq!(result.count(IssueKind::PathNotExists), 2);
        assert_eq!(result.count(IssueKind::MultipleFiles), 0);
    }

    #[test]
    fn clean_removes_every_problem() {
        let s = set(
            &[
                (".info", "# keep me\nsub/d.txt from root\nkeep.txt ok\nbroken\n"),
                ("sub/.info", "d.txt from sub\nd.txt again\ngone.txt nope\n"),
            ],
            &["sub", "sub/d.txt", "keep.txt"],
        );
        let (cleaned, result) = s.clean();

        assert_eq!(result.summary.malformed_lines_removed, 1);
        assert_eq!(result.summary.duplicates_removed, 3);
        assert_eq!(result.summary.invalid_paths_removed, 1);
        assert_eq!(result.summary.files_modified, 2);
        assert_eq!(result.updated_files, vec![".info", "sub/.info"]);
        assert_eq!(result.removed_annotations.len(), 3);

        assert_eq!(
            contents(&cleaned),
            vec![
                (".info".to_string(), "# keep me\nkeep.txt ok\n".to_string()),
                ("sub/.info".to_string(), String::new()),
            ]
        );
        assert!(cleaned.validate().is_valid());
        assert_eq!(cleaned.remove_empty().paths(), vec![".info"]);
    }

    #[test]
    fn clean_removes_every_occurrence_of_a_repeated_path() {
        let s = set(&[(".info", "a.txt X\na.txt Y\nb.txt B\n")], &["a.txt", "b.txt"]);
        let (cleaned, result) = s.clean();

        assert_eq!(result.summary.duplicates_removed, 2);
        assert_eq!(result.removed_annotations.len(), 1);
        assert_eq!(result.removed_annotations[0].text, "X");
        assert_eq!(cleaned.files()[0].serialize(), "b.txt B\n");
        assert!(!cleaned.gather().contains_key("a.txt"));
    }

    #[test]
    fn clean_is_idempotent() {
        let s = set(
            &[
                (".info", "a.txt X\na.txt Y\nnothing\nmissing.txt m\nsub/b.txt root\n"),
                ("sub/.info", "b.txt sub\n.. up\n"),
            ],
            &["a.txt", "sub", "sub/b.txt"],
        );
        let (once, first) = s.clean();
        assert!(first.summary.files_modified > 0);

        let (twice, second) = once.clean();
        assert_eq!(second.summary.files_modified, 0);
        assert!(second.removed_annotations.is_empty());
        assert!(once.validate().is_valid());
        assert_eq!(contents(&once), contents(&twice));
    }

    #[test]
    fn clean_leaves_the_original_untouched() {
        let s = set(&[(".info", "gone.txt x\n")], &[]);
        let (cleaned, _) = s.clean();
        assert!(s.files()[0].contains("gone.txt"));
        assert!(cleaned.files()[0].is_empty());
        assert_eq!(cleaned.remove_empty().len(), 0);
    }

    #[test]
    fn distribute_moves_to_closest_file() {
        let s = set(
            &[
                (".info", "sub/deep/x.txt from root\nroot.txt stays\n"),
                ("sub/deep/.info", "y.txt already here\n"),
            ],
            &["sub", "sub/deep", "sub/deep/x.txt", "sub/deep/y.txt", "root.txt"],
        );
        let (distributed, result) = s.distribute();

        assert_eq!(result.moved.len(), 1);
        assert_eq!(result.moved[0].to_file, "sub/deep/.info");
        assert_eq!(result.moved[0].to_path, "x.txt");
        assert_eq!(
            distributed.file("sub/deep/.info").unwrap().get("x.txt").unwrap().text,
            "from root"
        );
        assert!(!distributed.file(".info").unwrap().contains("sub/deep/x.txt"));
        assert_eq!(distributed.gather().len(), 3);
    }

    #[test]
    fn distribute_pulls_parent_targets_up() {
        let s = set(
            &[(".info", "readme.md top\n"), ("sub/.info", "../notes.txt from sub\n")],
            &["sub", "readme.md", "notes.txt"],
        );
        let (distributed, result) = s.distribute();
        assert_eq!(result.moved.len(), 1);
        assert_eq!(result.emptied_files, vec!["sub/.info"]);
        assert_eq!(distributed.paths(), vec![".info"]);
        assert_eq!(
            distributed.file(".info").unwrap().serialize(),
            "readme.md top\nnotes.txt from sub\n"
        );
    }

    #[test]
    fn distribute_drops_losing_duplicate() {
        let s = set(
            &[(".info", "sub/d.txt from root\n"), ("sub/.info", "d.txt from sub\n")],
            &["sub", "sub/d.txt"],
        );
        let (distributed, result) = s.distribute();
        assert!(result.moved.is_empty());
        assert_eq!(result.dropped.len(), 1);
        assert_eq!(result.dropped[0].source_file, ".info");
        assert_eq!(distributed.paths(), vec!["sub/.info"]);
        assert_eq!(distributed.gather()["sub/d.txt"].text, "from sub");
    }

    #[test]
    fn distribute_breaks_distance_ties_by_directory() {
        let s = set(
            &[
                ("sub_b/.info", "../target.txt from b\n"),
                ("sub_a/.info", "../other.txt from a\n"),
            ],
            &["sub_a", "sub_b", "target.txt", "other.txt"],
        );
        let (distributed, result) = s.distribute();

        assert_eq!(result.moved.len(), 1);
        assert_eq!(result.moved[0].to_file, "sub_a/.info");
        assert_eq!(result.emptied_files, vec!["sub_b/.info"]);
        assert_eq!(
            contents(&distributed),
            vec![(
                "sub_a/.info".to_string(),
                "../other.txt from a\n../target.txt from b\n".to_string()
            )]
        );

        let (again, second) = distributed.distribute();
        assert!(second.is_noop());
        assert_eq!(contents(&again), contents(&distributed));
    }

    #[test]
    fn distribute_is_idempotent() {
        let s = set(
            &[
                (".info", "a/b/c.txt deep\na/x.txt mid\ntop.txt top\n"),
                ("a/.info", "b/c.txt from a\n../top2.txt up\n"),
                ("a/b/.info", "# comment only\n"),
            ],
            &["a", "a/b", "a/b/c.txt", "a/x.txt", "top.txt", "top2.txt"],
        );
        let (once, _) = s.distribute();
        let (twice, second) = once.distribute();
        assert!(second.is_noop());
        assert_eq!(contents(&once), contents(&twice));
    }

    #[test]
    fn remove_empty_keeps_annotated_files() {
        let s = set(
            &[(".info", "# nothing\n"), ("a/.info", "x y\n")],
            &["a", "a/x"],
        );
        assert_eq!(s.remove_empty().paths(), vec!["a/.info"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn files_are_sorted_by_path() {
        let s = set(&[("z/.info", "a b\n"), (".info", "a b\n"), ("m/.info", "a b\n")], &[]);
        assert_eq!(s.paths(), vec![".info", "m/.info", "z/.info"]);
    }

    #[test]
    fn annotation_for_cleans_the_query() {
        let s = set(&[("sub/.info", "d.txt note\n")], &["sub", "sub/d.txt"]);
        assert_eq!(s.annotation_for("./sub/d.txt").unwrap().text, "note");
        assert!(s.annotation_for("sub/other.txt").is_none());
    }
}
