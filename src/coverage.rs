//! Report generated patterns that match nothing in the checkout.
//!
//! Purely advisory: a pattern for a manifest that does not exist yet is still
//! written, but flagging it helps spot a mistyped `directory` in the
//! Dependabot configuration.

use crate::error::Result;
use crate::rules::RuleLine;
use glob::{MatchOptions, Pattern};
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Directories never descended into while collecting candidate files.
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Distinct rule patterns that match no file under `repo_root`, in rule order.
pub fn unmatched_patterns(repo_root: &Path, rules: &[RuleLine]) -> Result<Vec<String>> {
    let files = collect_files(repo_root);
    debug!(
        "Checking {} rule(s) against {} file(s) under {}",
        rules.len(),
        files.len(),
        repo_root.display()
    );

    let mut seen = BTreeSet::new();
    let mut unmatched = Vec::new();
    for rule in rules {
        let pattern = rule.pattern();
        if !seen.insert(pattern) {
            continue;
        }
        let compiled = compile(pattern)?;
        if !files
            .iter()
            .any(|file| compiled.iter().any(|p| p.matches_with(file, MATCH_OPTIONS)))
        {
            unmatched.push(pattern.to_string());
        }
    }
    Ok(unmatched)
}

/// Compile an anchored ownership pattern into globs over relative paths.
///
/// `a/**/b` must also match `a/b`, which the glob crate only does when the
/// `**/` is leading, so the zero-directory form is compiled separately.
fn compile(pattern: &str) -> Result<Vec<Pattern>> {
    let unescaped = pattern.replace("\\ ", " ");
    let relative = unescaped.trim_start_matches('/');
    let mut globs = vec![Pattern::new(relative)?];
    if relative.contains("/**/") {
        globs.push(Pattern::new(&relative.replacen("/**/", "/", 1))?);
    }
    Ok(globs)
}

fn collect_files(repo_root: &Path) -> Vec<String> {
    WalkDir::new(repo_root)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !SKIPPED_DIRS.iter().any(|dir| entry.file_name() == *dir)
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(repo_root)
                .ok()
                .map(|relative| relative.to_string_lossy().replace('\\', "/"))
        })
        .collect()
}
