//! # Dependabot Configuration Reader
//!
//! This module loads a Dependabot configuration document
//! (`.github/dependabot.yml`) and turns its `updates` list into
//! [`UpdateEntry`] values ready for pattern resolution.
//!
//! ## Accepted shape
//!
//! ```yaml
//! version: 2
//! updates:
//!   - package-ecosystem: cargo
//!     directory: /
//!     reviewers: [alice, "@org/team"]
//!   - package-ecosystem: npm
//!     directories: [/web, /docs]
//!     reviewers:
//!       - username: bob
//! ```
//!
//! Only the fields used for ownership rules are read; everything else in the
//! document is ignored. Entries without reviewers are dropped, as are
//! reviewer objects without a recognizable username. A missing directory
//! defaults to `/`.
//! Only a document that cannot be read as a mapping with a list of updates is
//! rejected.

use crate::defaults;
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// One `updates` entry that carries reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// The `package-ecosystem` identifier, taken verbatim.
    pub ecosystem: String,
    /// Directories the update applies to; never empty.
    pub directories: Vec<String>,
    /// Reviewer identifiers in source order, duplicates preserved; never empty.
    pub reviewers: Vec<String>,
}

/// Raw form of an update entry, as it appears in the document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawUpdate {
    #[serde(default)]
    package_ecosystem: Option<String>,
    #[serde(default)]
    directory: Option<String>,
    #[serde(default)]
    directories: Option<Vec<String>>,
    #[serde(default)]
    reviewers: Option<Vec<Value>>,
}

/// Keys looked up, in order, when a reviewer is written as a mapping.
const USERNAME_KEYS: &[&str] = &["username", "login"];

/// Parses a Dependabot configuration document into update entries.
///
/// An empty document, or one without an `updates` key, yields an empty list.
pub fn parse(yaml_content: &str) -> Result<Vec<UpdateEntry>> {
    let root: Value = serde_yaml::from_str(yaml_content).map_err(Error::Yaml)?;

    let map = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(map) => map,
        _ => {
            return Err(Error::parse_with_hint(
                "Expected a YAML mapping at the top level",
                "A Dependabot config starts with 'version: 2' followed by an 'updates:' list",
            ))
        }
    };

    let updates = match map.get("updates") {
        None | Some(Value::Null) => {
            debug!("Configuration has no 'updates' key");
            return Ok(Vec::new());
        }
        Some(Value::Sequence(seq)) => seq.clone(),
        Some(_) => {
            return Err(Error::parse_with_hint(
                "'updates' must be a sequence",
                "Write each update as a '- package-ecosystem: ...' list item",
            ))
        }
    };

    let mut entries = Vec::new();
    for (index, value) in updates.into_iter().enumerate() {
        if !value.is_mapping() {
            return Err(Error::parse_with_hint(
                format!("Update #{} is not a mapping", index + 1),
                "Each update needs keys such as 'package-ecosystem' and 'directory'",
            ));
        }
        let raw: RawUpdate = serde_yaml::from_value(value).map_err(|e| Error::ConfigParse {
            message: format!("Update #{}: {}", index + 1, e),
            hint: None,
        })?;
        if let Some(entry) = convert_update(index, raw) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Reads and parses the configuration at `path`.
///
/// When `path` does not exist, the sibling with the other YAML extension is
/// tried before failing with [`Error::ConfigNotFound`].
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<UpdateEntry>> {
    let resolved = resolve_config_path(path.as_ref())?;
    debug!("Reading Dependabot configuration from {}", resolved.display());
    let content = std::fs::read_to_string(&resolved).map_err(Error::Io)?;
    parse(&content)
}

/// Returns the first existing candidate for `path`.
pub fn resolve_config_path(path: &Path) -> Result<PathBuf> {
    defaults::config_candidates(path)
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::ConfigNotFound {
            path: path.to_path_buf(),
        })
}

fn convert_update(index: usize, raw: RawUpdate) -> Option<UpdateEntry> {
    let ecosystem = match raw.package_ecosystem {
        Some(ecosystem) if !ecosystem.trim().is_empty() => ecosystem,
        _ => {
            warn!("Update #{} has no package-ecosystem; skipping", index + 1);
            return None;
        }
    };

    let Some(raw_reviewers) = raw.reviewers else {
        debug!("Update #{} ({}) has no reviewers; skipping", index + 1, ecosystem);
        return None;
    };

    let reviewers: Vec<String> = raw_reviewers.iter().filter_map(reviewer_name).collect();
    if reviewers.is_empty() {
        debug!(
            "Update #{} ({}) has no usable reviewers; skipping",
            index + 1,
            ecosystem
        );
        return None;
    }

    let directories = match (raw.directory, raw.directories) {
        (Some(_), Some(directories)) => {
            warn!(
                "Update #{} ({}) sets both 'directory' and 'directories'; using 'directories'",
                index + 1,
                ecosystem
            );
            directories
        }
        (None, Some(directories)) => directories,
        (Some(directory), None) => vec![directory],
        (None, None) => Vec::new(),
    };
    let directories = if directories.is_empty() {
        vec!["/".to_string()]
    } else {
        directories
    };

    Some(UpdateEntry {
        ecosystem,
        directories,
        reviewers,
    })
}

/// Extracts a reviewer identifier from a plain string or a username mapping.
fn reviewer_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(name) => name.as_str(),
        Value::Mapping(map) => USERNAME_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))?,
        other => {
            debug!("Ignoring reviewer of unexpected type: {:?}", other);
            return None;
        }
    };
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
