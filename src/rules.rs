//! Ownership rule lines
//!
//! Builds `<pattern> @owner...` lines from resolved manifest patterns and
//! orders them for a last-match-wins ownership file.
//!
//! ## Ordering
//!
//! Rules are sorted by, most significant first:
//!
//! 1. root patterns (`/<segment>` with no further `/`) before everything else
//! 2. fewer wildcard characters (`*`, `?`) first
//! 3. patterns whose last segment has an extension before those without
//! 4. fewer `/` characters first
//! 5. the full line text
//!
//! The key is total, so the output order depends only on the set of lines and
//! never on the order entries appear in the configuration.

use crate::config::UpdateEntry;
use crate::ecosystems::ManifestTable;
use log::{debug, warn};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// GitHub user or `org/team`, after `@` normalization.
static OWNER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:/[A-Za-z0-9._-]+)?$")
        .expect("owner pattern is a valid regex")
});

/// A single generated ownership rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pattern: String,
    owners: Vec<String>,
    text: String,
}

impl RuleLine {
    /// Build a rule from a pattern and reviewers, prefixing each reviewer with `@`.
    pub fn new<S: AsRef<str>>(pattern: impl Into<String>, reviewers: &[S]) -> Self {
        let pattern = pattern.into();
        let owners: Vec<String> = reviewers
            .iter()
            .map(|reviewer| normalize_owner(reviewer.as_ref()))
            .collect();
        let text = format!("{} {}", pattern, owners.join(" "));
        Self {
            pattern,
            owners,
            text,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// The rendered line, without a trailing newline.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn sort_key(&self) -> SortKey<'_> {
        SortKey {
            non_root: !is_root_pattern(&self.pattern),
            wildcards: wildcard_count(&self.pattern),
            extensionless: !has_extension(&self.pattern),
            depth: depth(&self.pattern),
            text: &self.text,
        }
    }
}

impl fmt::Display for RuleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Ord for RuleLine {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for RuleLine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Field order is the precedence order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey<'a> {
    non_root: bool,
    wildcards: usize,
    extensionless: bool,
    depth: usize,
    text: &'a str,
}

/// Prefix an owner with `@` unless it already has one.
///
/// Owners that still do not look like a GitHub user or team are kept as
/// written, with a warning.
pub fn normalize_owner(owner: &str) -> String {
    let owner = owner.trim();
    let normalized = if owner.starts_with('@') {
        owner.to_string()
    } else {
        format!("@{}", owner)
    };
    if !OWNER_PATTERN.is_match(&normalized) {
        warn!(
            "Reviewer '{}' does not look like a GitHub user or team",
            normalized
        );
    }
    normalized
}

/// A pattern with a single segment directly under the root, e.g. `/go.mod` or `/*`.
pub fn is_root_pattern(pattern: &str) -> bool {
    match pattern.strip_prefix('/') {
        Some(rest) => !rest.is_empty() && !rest.contains('/'),
        None => false,
    }
}

/// Number of `*` and `?` characters.
pub fn wildcard_count(pattern: &str) -> usize {
    pattern.chars().filter(|c| matches!(c, '*' | '?')).count()
}

/// Whether the last path segment contains a `.`.
pub fn has_extension(pattern: &str) -> bool {
    pattern
        .rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

/// Number of `/` characters.
pub fn depth(pattern: &str) -> usize {
    pattern.matches('/').count()
}

/// Fan out every entry into rule lines: one per resolved pattern and directory.
///
/// Unknown ecosystems contribute nothing. The result is unsorted.
pub fn build_rules(entries: &[UpdateEntry], table: &ManifestTable) -> Vec<RuleLine> {
    let mut rules = Vec::new();
    for entry in entries {
        if table.manifests(&entry.ecosystem).is_none() {
            debug!(
                "Skipping unsupported ecosystem '{}' ({} reviewer(s))",
                entry.ecosystem,
                entry.reviewers.len()
            );
            continue;
        }
        for directory in &entry.directories {
            for pattern in table.resolve(&entry.ecosystem, directory) {
                rules.push(RuleLine::new(pattern, &entry.reviewers));
            }
        }
    }
    rules
}

/// Sort rules into file order and drop exact duplicate lines.
pub fn sort_rules(rules: &mut Vec<RuleLine>) {
    rules.sort();
    rules.dedup_by(|a, b| a.text == b.text);
}
