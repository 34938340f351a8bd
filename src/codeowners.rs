//! CODEOWNERS section merge
//!
//! This module owns the machine-managed block inside an ownership file. The
//! block starts at the marker comment and runs until the next comment line
//! (other than a repeated marker) or the end of the file:
//!
//! ```text
//! * @org/maintainers
//!
//! # Dependabot reviewers (migrated from dependabot.yml)
//! /Cargo.toml @alice
//! /Cargo.lock @alice
//!
//! # Docs
//! /docs/ @writers
//! ```
//!
//! Merging replaces only that block. Lines before the marker and lines from
//! the end of the block onward are kept verbatim and in order. Blank lines
//! trailing the block stay in place as separation from the next section.
//!
//! Everything here works on strings; reading and writing the file is done by
//! [`crate::filesystem`].

use crate::defaults::{CODEOWNERS_FILE_NAME, CODEOWNERS_LOCATIONS, SECTION_MARKER, SECTION_MARKER_PREFIX};
use crate::rules::RuleLine;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Where the managed block stands in the current ownership file.
///
/// `lines` keep their original terminators (`\n` or `\r\n`); only the last
/// line of a file may lack one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// There is no ownership file yet.
    NoExistingFile,
    /// The file exists but has no marker line.
    ExistingFileNoSection { lines: Vec<String> },
    /// The file has a managed block covering `block` (marker included).
    ExistingFileWithSection { lines: Vec<String>, block: Range<usize> },
}

impl Section {
    /// Classify the existing file content (`None` when the file is absent).
    pub fn detect(existing: Option<&str>) -> Self {
        let Some(content) = existing else {
            return Section::NoExistingFile;
        };
        let lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
        match find_section(&lines) {
            Some(block) => Section::ExistingFileWithSection { lines, block },
            None => Section::ExistingFileNoSection { lines },
        }
    }
}

/// Result of merging generated rules into the ownership file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// Full new content of the file, always newline-terminated.
    pub content: String,
    /// False only when the managed block already matched exactly.
    pub has_changes: bool,
}

/// Whether `line` is a managed-block marker.
pub fn is_marker(line: &str) -> bool {
    line.trim_start().starts_with(SECTION_MARKER_PREFIX)
}

/// A line without its `\n` or `\r\n` terminator.
fn body(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The terminator used by the first line of `content`, `\n` when there is none.
pub fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(idx) if content[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Locate the managed block: marker index up to (not including) the next
/// foreign comment or EOF, with trailing blank lines left outside.
///
/// Lines may be given with or without their terminators.
pub fn find_section<S: AsRef<str>>(lines: &[S]) -> Option<Range<usize>> {
    let start = lines.iter().position(|line| is_marker(line.as_ref()))?;

    let mut end = lines.len();
    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        let line = line.as_ref();
        if line.trim_start().starts_with('#') && !is_marker(line) {
            end = idx;
            break;
        }
    }

    while end > start + 1 && lines[end - 1].as_ref().trim().is_empty() {
        end -= 1;
    }

    Some(start..end)
}

/// The block as it should read: marker followed by the sorted rules.
pub fn render_block(rules: &[RuleLine]) -> Vec<String> {
    let mut block = Vec::with_capacity(rules.len() + 1);
    block.push(SECTION_MARKER.to_string());
    block.extend(rules.iter().map(|rule| rule.as_str().to_string()));
    block
}

/// Merge already-sorted `rules` into the existing ownership file content.
///
/// Every byte outside the managed block is kept, including blank lines and
/// `\r\n` terminators. New lines use the terminator of the existing file.
pub fn merge(existing: Option<&str>, rules: &[RuleLine]) -> Merged {
    let block = render_block(rules);
    let newline = existing.map(line_ending).unwrap_or("\n");

    match Section::detect(existing) {
        Section::NoExistingFile => Merged {
            content: join_lines(&block, newline),
            has_changes: true,
        },
        Section::ExistingFileNoSection { lines } => {
            let mut content = lines.concat();
            if !content.is_empty() {
                if !content.ends_with('\n') {
                    content.push_str(newline);
                }
                content.push_str(newline);
            }
            content.push_str(&join_lines(&block, newline));
            Merged {
                content,
                has_changes: true,
            }
        }
        Section::ExistingFileWithSection { mut lines, block: range } => {
            let has_changes = !lines[range.clone()]
                .iter()
                .map(|line| body(line))
                .eq(block.iter().map(String::as_str));
            lines.splice(range, block.iter().map(|line| format!("{line}{newline}")));
            let mut content = lines.concat();
            if !content.ends_with('\n') {
                content.push_str(newline);
            }
            Merged {
                content,
                has_changes,
            }
        }
    }
}

fn join_lines(lines: &[String], newline: &str) -> String {
    let mut content = lines.join(newline);
    content.push_str(newline);
    content
}

/// First existing ownership file under `repo_root`, in preference order.
pub fn locate(repo_root: &Path) -> Option<PathBuf> {
    CODEOWNERS_LOCATIONS
        .iter()
        .map(|location| repo_root.join(location))
        .find(|path| path.is_file())
}

/// The root-level ownership file used when none exists yet.
pub fn default_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CODEOWNERS_FILE_NAME)
}
