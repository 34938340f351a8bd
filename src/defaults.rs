//! Default values for codeowners-migrate.
//!
//! This module centralizes the well-known file locations and the marker text
//! shared by the library and the CLI, so commands and tests agree on them.

use std::path::PathBuf;

/// Default location of the Dependabot configuration, relative to the repo root.
pub const DEFAULT_CONFIG_PATH: &str = ".github/dependabot.yml";

/// Name used when a new ownership file has to be created.
pub const CODEOWNERS_FILE_NAME: &str = "CODEOWNERS";

/// Locations searched for an existing ownership file, in preference order.
pub const CODEOWNERS_LOCATIONS: &[&str] = &["CODEOWNERS", ".github/CODEOWNERS", "docs/CODEOWNERS"];

/// First line of the managed block written into the ownership file.
pub const SECTION_MARKER: &str = "# Dependabot reviewers (migrated from dependabot.yml)";

/// Prefix that identifies a managed block regardless of the config file it names.
pub const SECTION_MARKER_PREFIX: &str = "# Dependabot reviewers (migrated from";

/// Returns the default configuration path as a `PathBuf`.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

/// Returns the candidate configuration paths tried for `path`.
///
/// Dependabot accepts both `.yml` and `.yaml`, so when the requested file is
/// missing its sibling with the other extension is tried next.
pub fn config_candidates(path: &std::path::Path) -> Vec<PathBuf> {
    let mut candidates = vec![path.to_path_buf()];
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") => candidates.push(path.with_extension("yaml")),
        Some("yaml") => candidates.push(path.with_extension("yml")),
        _ => {}
    }
    candidates
}
