//! # Error Handling
//!
//! This module defines the centralized error type for the migration library.
//! It uses `thiserror` to describe every failure the core can surface, with
//! messages that name the file involved so the CLI can print them verbatim.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. Reading a missing
//!   Dependabot configuration, failing to parse it, and filesystem failures
//!   around the ownership file are the only fatal conditions; everything
//!   else (unknown ecosystems, entries without reviewers) is skipped rather
//!   than reported as an error.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! An input that parses but produces no rules is not an error. It surfaces
//! as [`crate::migration::Status::NoReviewers`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for codeowners-migrate operations
#[derive(Error, Debug)]
pub enum Error {
    /// The Dependabot configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The Dependabot configuration exists but does not have the expected shape.
    ///
    /// Carries an optional hint about how to fix the document.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// Reading or writing the ownership file (or a sibling temp file) failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A generated pattern could not be compiled as a glob.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An error occurred during serialization of a report.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Shorthand for a `ConfigParse` error carrying a hint.
    pub fn parse_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Error::ConfigParse {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
