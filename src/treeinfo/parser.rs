//! The line tokenizer.
//!
//! A content line is `<path><whitespace><annotation>`. Spaces inside the path are
//! written as `\ `; the first whitespace character that is not escaped ends the
//! path. Callers strip blank lines and `#` comments before getting here.

use crate::paths;
use std::fmt;

/// Why a line did not become an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// No unescaped whitespace separates the path from the annotation.
    MissingSeparator,
    /// The path is followed only by whitespace.
    EmptyAnnotation,
    /// The path was already annotated earlier in the same file.
    DuplicatePath { path: String, text: String },
    /// The annotation on this line was removed and will not be written back.
    Removed,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::MissingSeparator => write!(f, "missing separator"),
            LineError::EmptyAnnotation => write!(f, "empty annotation"),
            LineError::DuplicatePath { .. } => {
                write!(f, "duplicate path (first occurrence wins)")
            }
            LineError::Removed => write!(f, "removed"),
        }
    }
}

impl std::error::Error for LineError {}

/// Splits a trimmed, non-comment line into `(path, annotation)`.
///
/// # Examples
/// ```
/// use treeinfo::parser::{parse_line, LineError};
///
/// assert_eq!(
///     parse_line("src/main.rs   entry point"),
///     Ok(("src/main.rs".to_string(), "entry point".to_string()))
/// );
/// assert_eq!(
///     parse_line(r"my\ notes.txt  scratch"),
///     Ok(("my notes.txt".to_string(), "scratch".to_string()))
/// );
/// assert_eq!(parse_line("lonely"), Err(LineError::MissingSeparator));
/// ```
pub fn parse_line(line: &str) -> Result<(String, String), LineError> {
    let mut escaped = false;
    let mut split_at = None;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
        } else if ch.is_whitespace() {
            split_at = Some(i);
            break;
        }
    }

    let split_at = split_at.ok_or(LineError::MissingSeparator)?;
    let text = line[split_at..].trim();
    if text.is_empty() {
        return Err(LineError::EmptyAnnotation);
    }

    Ok((paths::unescape(&line[..split_at]), text.to_string()))
}

/// Renders a path and annotation back into a content line.
pub fn format_line(path: &str, text: &str) -> String {
    format!("{} {}", paths::escape(path), text)
}
