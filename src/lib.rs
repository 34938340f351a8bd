//! # Dependabot Reviewers to CODEOWNERS
//!
//! This library migrates the `reviewers` lists of a Dependabot configuration
//! into a managed section of a CODEOWNERS file. It backs the
//! `codeowners-migrate` command-line tool but has no CLI dependencies of its
//! own.
//!
//! ## Quick Example
//!
//! ```
//! use codeowners_migrate::{codeowners, config, ecosystems::ManifestTable, rules};
//!
//! let entries = config::parse(r#"
//! updates:
//!   - package-ecosystem: cargo
//!     directory: /
//!     reviewers: [alice]
//! "#).unwrap();
//!
//! let mut generated = rules::build_rules(&entries, ManifestTable::builtin());
//! rules::sort_rules(&mut generated);
//!
//! let merged = codeowners::merge(Some("* @org/all\n"), &generated);
//! assert!(merged.has_changes);
//! assert!(merged.content.contains("/Cargo.toml @alice"));
//! ```
//!
//! ## Pipeline
//!
//! 1.  **Read** (`config`): load the `updates` list, keeping entries with
//!     reviewers.
//! 2.  **Resolve** (`ecosystems`): map each ecosystem and directory to
//!     manifest path patterns.
//! 3.  **Build** (`rules`): one `<pattern> @owner...` line per pattern.
//! 4.  **Sort** (`rules`): root patterns first, then by specificity.
//! 5.  **Merge** (`codeowners`): replace the managed block, keeping every
//!     other line of the file as it was.
//!
//! `migration::run` drives all five steps and writes the file atomically
//! (`filesystem`) when the managed block changed.

pub mod codeowners;
pub mod config;
pub mod coverage;
pub mod defaults;
pub mod ecosystems;
pub mod error;
pub mod exit_codes;
pub mod filesystem;
pub mod migration;
pub mod output;
pub mod rules;
pub mod suggestions;

#[cfg(test)]
mod rules_proptest;
