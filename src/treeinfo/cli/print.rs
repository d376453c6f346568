use colored::Colorize;
use console::Term;
use std::collections::BTreeMap;
use treeinfo::api::{CmdMessage, MessageLevel};
use treeinfo::model::Annotation;
use treeinfo::validation::ValidationResult;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_WIDTH: usize = 100;
const PATH_GAP: usize = 2;

/// Terminal width, or a fixed width when stdout is not a terminal.
pub(super) fn line_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// One row per target: the path padded to a common column, then the text
/// truncated to what is left of the line.
pub(super) fn render_gathered(gathered: &BTreeMap<String, Annotation>, width: usize) -> String {
    let path_width = gathered.keys().map(|p| p.width()).max().unwrap_or(0);
    let available = width.saturating_sub(path_width + PATH_GAP);

    let mut output = String::new();
    for (path, annotation) in gathered {
        let padding = path_width.saturating_sub(path.width()) + PATH_GAP;
        output.push_str(&format!(
            "{}{}{}\n",
            path.bold(),
            " ".repeat(padding),
            truncate_to_width(&annotation.text, available)
        ));
    }
    output
}

pub(super) fn render_validation(result: &ValidationResult) -> String {
    let mut output = String::new();
    for file in &result.invalid_files {
        output.push_str(&format!("{}\n", file.bold()));
        for issue in result.issues_for(file) {
            output.push_str(&format!(
                "  {:>4}  {}  {}\n",
                issue.line_number,
                format!("[{}]", issue.kind).yellow(),
                issue.message
            ));
        }
    }
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
