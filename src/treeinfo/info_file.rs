//! # Info Files
//!
//! An [`InfoFile`] is the in-memory form of one `.info` file. Parsing classifies every
//! physical line once and keeps its raw text, so anything an edit does not touch is
//! written back byte for byte. Mistakes a human made (unparseable lines, repeated
//! paths) stay visible in the file instead of being silently dropped.
//!
//! The index maps each annotated local path to the position of its line. Annotations
//! are derived from lines on demand; nothing else holds on to them.
//!
//! ## Format
//!
//! ```text
//! # comments and blank lines are ignored
//! src/main.rs      entry point
//! my\ notes.txt    spaces in paths are escaped
//! .                this directory
//! ```
//!
//! Within one file the first occurrence of a path wins; later ones are flagged as
//! duplicates and kept inert.

use crate::model::Annotation;
use crate::parser::{format_line, parse_line, LineError};
use crate::paths;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Annotation { path: String, text: String },
    Malformed(LineError),
}

/// One physical line of an info file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the file.
    pub number: usize,
    pub raw: String,
    pub kind: LineKind,
}

impl Line {
    pub fn error(&self) -> Option<&LineError> {
        match &self.kind {
            LineKind::Malformed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self.kind, LineKind::Malformed(LineError::Removed))
    }
}

#[derive(Debug, Clone)]
pub struct InfoFile {
    path: String,
    lines: Vec<Line>,
    index: HashMap<String, usize>,
    modified: bool,
}

impl InfoFile {
    /// Parses the text of the info file stored at `path` (root-relative).
    pub fn parse(path: impl Into<String>, content: &str) -> Self {
        let mut lines = Vec::new();
        let mut index = HashMap::new();

        for (i, raw) in content.split('\n').enumerate() {
            let trimmed = raw.trim();
            let kind = if trimmed.is_empty() {
                LineKind::Blank
            } else if trimmed.starts_with('#') {
                LineKind::Comment
            } else {
                match parse_line(trimmed) {
                    Ok((path, text)) if index.contains_key(&path) => {
                        LineKind::Malformed(LineError::DuplicatePath { path, text })
                    }
                    Ok((path, text)) => {
                        index.insert(path.clone(), i);
                        LineKind::Annotation { path, text }
                    }
                    Err(err) => LineKind::Malformed(err),
                }
            };
            lines.push(Line {
                number: i + 1,
                raw: raw.to_string(),
                kind,
            });
        }

        Self {
            path: path.into(),
            lines,
            index,
            modified: false,
        }
    }

    /// A brand new info file with no content.
    pub fn new(path: impl Into<String>) -> Self {
        Self::parse(path, "")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Root-relative directory this file annotates.
    pub fn dir(&self) -> String {
        paths::dir(&self.path)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<Annotation> {
        self.index
            .get(path)
            .and_then(|&pos| self.annotation_at(pos))
    }

    fn annotation_at(&self, pos: usize) -> Option<Annotation> {
        let line = self.lines.get(pos)?;
        match &line.kind {
            LineKind::Annotation { path, text } => Some(Annotation::new(
                path.as_str(),
                text.as_str(),
                self.path.as_str(),
                line.number,
            )),
            _ => None,
        }
    }

    /// Current annotations in file order.
    pub fn annotations(&self) -> Vec<Annotation> {
        (0..self.lines.len())
            .filter_map(|pos| self.annotation_at(pos))
            .collect()
    }

    /// Lines that failed to parse or were flagged, excluding removed ones.
    pub fn malformed_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines
            .iter()
            .filter(|line| line.error().is_some() && !line.is_removed())
    }

    /// Appends an annotation. Returns false if `path` is already annotated here.
    ///
    /// When the file ends with a newline, the new line goes before that final
    /// empty line so the trailing newline survives.
    pub fn add(&mut self, path: &str, text: &str) -> bool {
        if self.index.contains_key(path) {
            return false;
        }

        let ends_with_newline = self
            .lines
            .last()
            .is_some_and(|line| line.kind == LineKind::Blank && line.raw.is_empty());
        let pos = if ends_with_newline {
            self.lines.len() - 1
        } else {
            self.lines.len()
        };

        self.lines.insert(
            pos,
            Line {
                number: pos + 1,
                raw: format_line(path, text),
                kind: LineKind::Annotation {
                    path: path.to_string(),
                    text: text.to_string(),
                },
            },
        );
        if let Some(trailing) = self.lines.get_mut(pos + 1) {
            trailing.number = pos + 2;
        }
        self.index.insert(path.to_string(), pos);
        self.modified = true;
        true
    }

    /// Replaces the text for `path`, rewriting only that line.
    pub fn update(&mut self, path: &str, text: &str) -> bool {
        let Some(&pos) = self.index.get(path) else {
            return false;
        };
        let line = &mut self.lines[pos];
        line.raw = format_line(path, text);
        line.kind = LineKind::Annotation {
            path: path.to_string(),
            text: text.to_string(),
        };
        self.modified = true;
        true
    }

    /// Drops the annotation for `path`. The line keeps its slot (flagged as
    /// removed) but is no longer serialized.
    pub fn remove(&mut self, path: &str) -> bool {
        let Some(pos) = self.index.remove(path) else {
            return false;
        };
        self.lines[pos].kind = LineKind::Malformed(LineError::Removed);
        self.modified = true;
        true
    }

    /// Retires a malformed line (by line number) so it is not written back.
    /// Annotation, comment and blank lines are left alone.
    pub fn remove_line(&mut self, number: usize) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.number == number) else {
            return false;
        };
        let retirable =
            matches!(&line.kind, LineKind::Malformed(err) if *err != LineError::Removed);
        if !retirable {
            return false;
        }
        line.kind = LineKind::Malformed(LineError::Removed);
        self.modified = true;
        true
    }

    pub fn serialize(&self) -> String {
        self.lines
            .iter()
            .filter(|line| !line.is_removed())
            .map(|line| line.raw.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// No annotations left. Comments and broken lines do not count.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether any edit was applied since parsing.
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# project notes\n\nsrc/main.rs  entry point\n   \n  # indented comment\ndocs\nREADME.md readme\nREADME.md again\n";

    #[test]
    fn roundtrip_preserves_every_line() {
        let file = InfoFile::parse(".info", SAMPLE);
        assert_eq!(file.serialize(), SAMPLE);
    }

    #[test]
    fn roundtrip_without_trailing_newline() {
        let text = "a.txt one\r\nb.txt two";
        let file = InfoFile::parse(".info", text);
        assert_eq!(file.serialize(), text);
        assert_eq!(file.get("a.txt").unwrap().text, "one");
    }

    #[test]
    fn empty_content_roundtrips() {
        let file = InfoFile::parse(".info", "");
        assert_eq!(file.serialize(), "");
        assert!(file.is_empty());
    }

    #[test]
    fn classifies_lines() {
        let file = InfoFile::parse(".info", SAMPLE);
        let kinds: Vec<_> = file.lines().iter().map(|l| l.kind.clone()).collect();
        assert_eq!(kinds[0], LineKind::Comment);
        assert_eq!(kinds[1], LineKind::Blank);
        assert!(matches!(kinds[2], LineKind::Annotation { .. }));
        assert_eq!(kinds[3], LineKind::Blank);
        assert_eq!(kinds[4], LineKind::Comment);
        assert_eq!(kinds[5], LineKind::Malformed(LineError::MissingSeparator));
        assert!(matches!(kinds[6], LineKind::Annotation { .. }));
        assert!(matches!(
            kinds[7],
            LineKind::Malformed(LineError::DuplicatePath { .. })
        ));
        assert_eq!(file.lines()[5].number, 6);
    }

    #[test]
    fn first_occurrence_wins() {
        let file = InfoFile::parse(".info", "a.txt X\na.txt Y\n");
        let annotations = file.annotations();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].target_path, "a.txt");
        assert_eq!(annotations[0].text, "X");
        assert_eq!(annotations[0].line_number, 1);

        let second = &file.lines()[1];
        assert_eq!(
            second.error().map(|e| e.to_string()).as_deref(),
            Some("duplicate path (first occurrence wins)")
        );
    }

    #[test]
    fn annotations_follow_file_order() {
        let file = InfoFile::parse("sub/.info", "z.txt last\na.txt first\nm.txt middle");
        let order: Vec<_> = file
            .annotations()
            .into_iter()
            .map(|a| a.target_path)
            .collect();
        assert_eq!(order, vec!["z.txt", "a.txt", "m.txt"]);
        assert!(file
            .annotations()
            .iter()
            .all(|a| a.source_file == "sub/.info"));
    }

    #[test]
    fn add_escapes_spaces() {
        let mut file = InfoFile::new(".info");
        assert!(file.add("path with spaces.txt", "note"));
        assert!(file.serialize().starts_with(r"path\ with\ spaces.txt"));

        let reparsed = InfoFile::parse(".info", &file.serialize());
        assert_eq!(reparsed.get("path with spaces.txt").unwrap().text, "note");
    }

    #[test]
    fn add_keeps_trailing_newline() {
        let mut file = InfoFile::parse(".info", "a X\n");
        assert!(file.add("b", "Y"));
        assert_eq!(file.serialize(), "a X\nb Y\n");
        assert_eq!(file.get("b").unwrap().line_number, 2);
        assert_eq!(file.lines()[2].number, 3);
    }

    #[test]
    fn add_without_trailing_newline_appends() {
        let mut file = InfoFile::parse(".info", "# c\na X");
        assert!(file.add("b", "Y"));
        assert_eq!(file.serialize(), "# c\na X\nb Y");
    }

    #[test]
    fn add_refuses_existing_path() {
        let mut file = InfoFile::parse(".info", "a X\n");
        assert!(!file.add("a", "other"));
        assert_eq!(file.get("a").unwrap().text, "X");
        assert!(!file.is_modified());
    }

    #[test]
    fn update_rewrites_only_that_line() {
        let mut file = InfoFile::parse(".info", "#c\na    old text\nb  keep   spacing\n");
        assert!(file.update("a", "new text"));
        assert_eq!(file.serialize(), "#c\na new text\nb  keep   spacing\n");
        assert_eq!(file.get("a").unwrap().text, "new text");
        assert!(file.is_modified());
    }

    #[test]
    fn update_missing_path_fails() {
        let mut file = InfoFile::parse(".info", "a X\n");
        assert!(!file.update("nope", "Y"));
        assert!(!file.is_modified());
    }

    #[test]
    fn remove_hides_line_but_keeps_slot() {
        let mut file = InfoFile::parse(".info", "a X\nb Y\nc Z\n");
        assert!(file.remove("b"));
        assert!(!file.contains("b"));
        assert_eq!(file.serialize(), "a X\nc Z\n");
        assert!(file.lines()[1].is_removed());
        assert_eq!(file.lines().len(), 4);
        assert!(!file.remove("b"));
    }

    #[test]
    fn duplicate_does_not_resurface_after_remove() {
        let mut file = InfoFile::parse(".info", "a X\na Y\n");
        assert!(file.remove("a"));
        assert!(file.is_empty());
        assert_eq!(file.serialize(), "a Y\n");
    }

    #[test]
    fn remove_line_only_touches_malformed_lines() {
        let mut file = InfoFile::parse(".info", "broken\na X\n# c\n");
        assert!(!file.remove_line(2));
        assert!(!file.remove_line(3));
        assert!(file.remove_line(1));
        assert!(!file.remove_line(1));
        assert_eq!(file.serialize(), "a X\n# c\n");
        assert_eq!(file.malformed_lines().count(), 0);
    }

    #[test]
    fn emptiness_ignores_comments() {
        let mut file = InfoFile::parse(".info", "# only a comment\nbroken\n");
        assert!(file.is_empty());
        assert!(file.add("x", "y"));
        assert!(!file.is_empty());
        assert!(file.remove("x"));
        assert!(file.is_empty());
    }

    #[test]
    fn dir_of_nested_file() {
        assert_eq!(InfoFile::new("a/b/.info").dir(), "a/b");
        assert_eq!(InfoFile::new(".info").dir(), ".");
    }
}
