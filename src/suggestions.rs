//! # Error Suggestions
//!
//! Helpers that turn library errors into messages telling the user what went
//! wrong and how to fix it.
//!
//! ```rust,ignore
//! let report = migration::run(&options).map_err(suggestions::explain)?;
//! ```

use crate::error::Error;
use std::path::Path;

/// Error for a Dependabot configuration that does not exist.
///
/// Includes hints about:
/// - Where Dependabot expects the file
/// - Using the -c/--config flag
/// - Using the DEPENDABOT_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Dependabot reads .github/dependabot.yml (or .yaml) from the repository root\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Use --repo-root to point at another checkout\n\
         hint: Set DEPENDABOT_CONFIG environment variable",
        path = path.display()
    )
}

/// Error for a configuration that could not be parsed.
pub fn config_unreadable(error: &Error) -> anyhow::Error {
    anyhow::anyhow!(
        "{error}\n\n\
         hint: Check the file with a YAML linter\n\
         hint: The file needs a top-level 'updates:' list of mappings"
    )
}

/// Error for an ownership file that could not be read or written.
pub fn codeowners_io(error: &Error) -> anyhow::Error {
    anyhow::anyhow!(
        "{error}\n\n\
         hint: Check that the CODEOWNERS location is writable\n\
         hint: Use -o/--codeowners to choose a different file"
    )
}

/// Map a library error to a user-facing error with hints.
pub fn explain(error: Error) -> anyhow::Error {
    match &error {
        Error::ConfigNotFound { path } => config_not_found(path),
        Error::ConfigParse { .. } | Error::Yaml(_) => config_unreadable(&error),
        Error::Filesystem { .. } | Error::Io(_) => codeowners_io(&error),
        Error::Glob(_) | Error::Serialization { .. } => anyhow::Error::new(error),
    }
}
