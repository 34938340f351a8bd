//! # Migration Pipeline
//!
//! Runs the full transformation once:
//!
//! 1. **Read** the Dependabot configuration ([`crate::config`]).
//! 2. **Resolve** manifest patterns per ecosystem and directory
//!    ([`crate::ecosystems`]).
//! 3. **Build** one rule line per pattern ([`crate::rules`]).
//! 4. **Sort** the rules into file order.
//! 5. **Merge** them into the managed block of the ownership file
//!    ([`crate::codeowners`]) and write it back when it changed.
//!
//! Each step only consumes the previous step's output. Nothing here retries;
//! every error propagates to the caller with the ownership file untouched.

use crate::codeowners;
use crate::config;
use crate::ecosystems::ManifestTable;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::rules::{self, RuleLine};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Inputs for one migration run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Dependabot configuration, relative to `repo_root` unless absolute.
    pub config_path: PathBuf,
    /// Root of the repository checkout.
    pub repo_root: PathBuf,
    /// Explicit ownership file; located under `repo_root` when `None`.
    pub codeowners_path: Option<PathBuf>,
    /// Compute the result without writing anything.
    pub dry_run: bool,
}

impl MigrationOptions {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            config_path: crate::defaults::default_config_path(),
            repo_root: repo_root.into(),
            codeowners_path: None,
            dry_run: false,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.repo_root.join(path)
        }
    }

    /// The ownership file this run reads and writes.
    pub fn target_path(&self) -> PathBuf {
        match &self.codeowners_path {
            Some(path) => self.resolve(path),
            None => codeowners::locate(&self.repo_root)
                .unwrap_or_else(|| codeowners::default_path(&self.repo_root)),
        }
    }
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// The managed block changed (and was written unless this was a dry run).
    Updated,
    /// The managed block already matched the configuration.
    UpToDate,
    /// The configuration produced no rules; nothing was read or written.
    NoReviewers,
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub status: Status,
    /// Ownership file that was (or would be) written.
    pub codeowners_path: PathBuf,
    /// Generated rule lines in file order.
    pub rules: Vec<String>,
    pub dry_run: bool,
    /// Full new content of the ownership file, when there is any.
    #[serde(skip)]
    pub content: Option<String>,
    #[serde(skip)]
    rule_lines: Vec<RuleLine>,
}

impl MigrationReport {
    /// True when the ownership file differs from the configuration.
    pub fn has_changes(&self) -> bool {
        self.status == Status::Updated
    }

    /// True when the file was actually written during this run.
    pub fn written(&self) -> bool {
        self.has_changes() && !self.dry_run
    }

    /// The generated rules, for follow-up checks such as coverage.
    pub fn rule_lines(&self) -> &[RuleLine] {
        &self.rule_lines
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }
}

/// Generate the sorted rules for a configuration file.
pub fn generate_rules(config_path: &Path, table: &ManifestTable) -> Result<Vec<RuleLine>> {
    let entries = config::from_file(config_path)?;
    debug!("{} update(s) with reviewers", entries.len());

    let mut rules = rules::build_rules(&entries, table);
    rules::sort_rules(&mut rules);
    debug!("{} rule(s) generated", rules.len());
    Ok(rules)
}

/// Run the pipeline with the built-in ecosystem table.
pub fn run(options: &MigrationOptions) -> Result<MigrationReport> {
    run_with_table(options, ManifestTable::builtin())
}

/// Run the pipeline with an explicit ecosystem table.
pub fn run_with_table(options: &MigrationOptions, table: &ManifestTable) -> Result<MigrationReport> {
    let config_path = options.resolve(&options.config_path);
    let rules = generate_rules(&config_path, table)?;
    let target = options.target_path();

    if rules.is_empty() {
        info!("No reviewers configured in {}", config_path.display());
        return Ok(MigrationReport {
            status: Status::NoReviewers,
            codeowners_path: target,
            rules: Vec::new(),
            dry_run: options.dry_run,
            content: None,
            rule_lines: Vec::new(),
        });
    }

    let existing = filesystem::read_optional(&target)?;
    let merged = codeowners::merge(existing.as_deref(), &rules);

    let status = if merged.has_changes {
        Status::Updated
    } else {
        Status::UpToDate
    };

    if merged.has_changes && !options.dry_run {
        filesystem::write_atomic(&target, &merged.content)?;
        info!("Updated {} with {} rule(s)", target.display(), rules.len());
    } else if merged.has_changes {
        info!("Dry run: {} would be updated", target.display());
    } else {
        debug!("{} is already up to date", target.display());
    }

    Ok(MigrationReport {
        status,
        codeowners_path: target,
        rules: rules.iter().map(|rule| rule.as_str().to_string()).collect(),
        dry_run: options.dry_run,
        content: Some(merged.content),
        rule_lines: rules,
    })
}
