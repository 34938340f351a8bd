//! Migrate command implementation
//!
//! Runs the whole pipeline: read the Dependabot configuration, generate and
//! sort the ownership rules, and replace the managed block in the CODEOWNERS
//! file. The file is written only when the block changed.

use anyhow::{Context, Result};
use clap::Args;
use log::warn;
use std::path::PathBuf;

use codeowners_migrate::coverage;
use codeowners_migrate::defaults::DEFAULT_CONFIG_PATH;
use codeowners_migrate::exit_codes;
use codeowners_migrate::migration::{self, MigrationOptions, MigrationReport};
use codeowners_migrate::output::{self, emoji, OutputConfig};
use codeowners_migrate::suggestions;

/// Input and target locations shared by `migrate` and `check`
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the Dependabot configuration (relative to the repo root)
    #[arg(short, long, value_name = "PATH", env = "DEPENDABOT_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// CODEOWNERS file to update (defaults to the first existing of
    /// CODEOWNERS, .github/CODEOWNERS, docs/CODEOWNERS)
    #[arg(short = 'o', long, value_name = "PATH", env = "CODEOWNERS_PATH")]
    pub codeowners: Option<PathBuf>,

    /// Repository root (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub repo_root: Option<PathBuf>,

    /// Warn about generated patterns that match no file in the repository
    #[arg(long)]
    pub report_unmatched: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl SourceArgs {
    /// Build pipeline options, resolving the repo root against the current directory.
    pub fn to_options(&self, dry_run: bool) -> Result<MigrationOptions> {
        let repo_root = match &self.repo_root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };
        let mut options = MigrationOptions::new(repo_root);
        options.config_path = self.config.clone();
        options.codeowners_path = self.codeowners.clone();
        options.dry_run = dry_run;
        Ok(options)
    }

    /// Print the report according to `--json` / `--quiet`.
    pub fn print_report(&self, output: &OutputConfig, report: &MigrationReport) -> Result<()> {
        if self.json {
            println!("{}", report.to_json()?);
        } else if !self.quiet {
            println!("{}", output::summary_line(output, report));
        }
        Ok(())
    }

    /// Run the advisory unmatched-pattern check when requested.
    pub fn check_coverage(&self, options: &MigrationOptions, report: &MigrationReport) -> Result<()> {
        if !self.report_unmatched {
            return Ok(());
        }
        let unmatched = coverage::unmatched_patterns(&options.repo_root, report.rule_lines())?;
        for pattern in &unmatched {
            warn!("Pattern {} matches no file in {}", pattern, options.repo_root.display());
        }
        Ok(())
    }
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Show what would change without writing the CODEOWNERS file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Append has_changes/codeowners_path lines to this file
    #[arg(long, value_name = "PATH", env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
}

/// Execute the migrate command
pub fn execute(args: MigrateArgs, output: &OutputConfig) -> Result<u8> {
    let options = args.source.to_options(args.dry_run)?;
    let report = migration::run(&options).map_err(suggestions::explain)?;

    args.source.check_coverage(&options, &report)?;

    if let Some(path) = &args.github_output {
        output::write_step_outputs(path, &report).map_err(suggestions::explain)?;
    }

    args.source.print_report(output, &report)?;

    if args.dry_run && report.has_changes() && !args.source.quiet && !args.source.json {
        println!();
        println!("{} New managed section:", emoji(output, "📋", "[RULES]"));
        for rule in &report.rules {
            println!("  {}", rule);
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PLAIN: OutputConfig = OutputConfig { use_color: false };

    fn args_for(root: &std::path::Path) -> MigrateArgs {
        MigrateArgs {
            source: SourceArgs {
                config: PathBuf::from(DEFAULT_CONFIG_PATH),
                codeowners: None,
                repo_root: Some(root.to_path_buf()),
                report_unmatched: false,
                json: false,
                quiet: true,
            },
            dry_run: false,
            github_output: None,
        }
    }

    fn write_config(root: &std::path::Path, content: &str) {
        fs::create_dir_all(root.join(".github")).unwrap();
        fs::write(root.join(".github/dependabot.yml"), content).unwrap();
    }

    #[test]
    fn test_execute_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = execute(args_for(temp_dir.path()), &PLAIN);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Configuration file not found"));
    }

    #[test]
    fn test_execute_writes_codeowners() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "updates:\n  - package-ecosystem: gomod\n    reviewers: [alice]\n",
        );

        execute(args_for(temp_dir.path()), &PLAIN).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("CODEOWNERS")).unwrap();
        assert!(content.contains("/go.mod @alice"));
    }

    #[test]
    fn test_dry_run_mode() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "updates:\n  - package-ecosystem: gomod\n    reviewers: [alice]\n",
        );
        let mut args = args_for(temp_dir.path());
        args.dry_run = true;

        execute(args, &PLAIN).unwrap();

        assert!(!temp_dir.path().join("CODEOWNERS").exists());
    }

    #[test]
    fn test_github_output_written() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "updates:\n  - package-ecosystem: gomod\n    reviewers: [alice]\n",
        );
        let step_output = temp_dir.path().join("step_output");
        let mut args = args_for(temp_dir.path());
        args.github_output = Some(step_output.clone());

        execute(args, &PLAIN).unwrap();

        let content = fs::read_to_string(step_output).unwrap();
        assert!(content.starts_with("has_changes=true\ncodeowners_path="));
    }

    #[test]
    fn test_report_unmatched_does_not_fail() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "updates:\n  - package-ecosystem: terraform\n    directory: /infra\n    reviewers: [ops]\n",
        );
        let mut args = args_for(temp_dir.path());
        args.source.report_unmatched = true;

        let result = execute(args, &PLAIN);
        assert!(result.is_ok());
    }
}
