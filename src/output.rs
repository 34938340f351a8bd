//! # Output Configuration
//!
//! Console presentation for the CLI and the key=value step-output channel
//! used to hand results to an automation runner.
//!
//! ## Respecting User Preferences
//!
//! Colors follow the usual conventions:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Step outputs
//!
//! [`write_step_outputs`] appends `has_changes=<bool>` and, when the file
//! changed, `codeowners_path=<path>` to a file such as `$GITHUB_OUTPUT`.

use crate::error::{Error, Result};
use crate::migration::{MigrationReport, Status};
use console::style;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag.
    ///
    /// `always` and `never` are honoured as-is; anything else detects support
    /// from the environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One-line, human-readable summary of a migration report.
pub fn summary_line(config: &OutputConfig, report: &MigrationReport) -> String {
    let path = report.codeowners_path.display();
    match report.status {
        Status::Updated if report.dry_run => format!(
            "{} {} would be updated with {} rule(s)",
            emoji(config, "🔎", "[DRY-RUN]"),
            path,
            report.rules.len()
        ),
        Status::Updated => {
            let verb = if config.use_color {
                style("Updated").green().bold().to_string()
            } else {
                "Updated".to_string()
            };
            format!(
                "{} {} {} with {} rule(s)",
                emoji(config, "✅", "[OK]"),
                verb,
                path,
                report.rules.len()
            )
        }
        Status::UpToDate => format!(
            "{} {} is already up to date",
            emoji(config, "✅", "[OK]"),
            path
        ),
        Status::NoReviewers => format!(
            "{} No reviewers configured; nothing to migrate",
            emoji(config, "ℹ️ ", "[INFO]")
        ),
    }
}

/// Render the key=value lines for the step-output channel.
pub fn step_outputs(report: &MigrationReport) -> String {
    let mut out = format!("has_changes={}\n", report.has_changes());
    if report.has_changes() {
        out.push_str(&format!(
            "codeowners_path={}\n",
            report.codeowners_path.display()
        ));
    }
    out
}

/// Append the step outputs for `report` to `path`, creating it if needed.
pub fn write_step_outputs(path: &Path, report: &MigrationReport) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to open step output '{}': {}", path.display(), e),
        })?;
    file.write_all(step_outputs(report).as_bytes())
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to write step output '{}': {}", path.display(), e),
        })
}
