//! # Check Command Implementation
//!
//! Computes the managed CODEOWNERS section without writing anything and
//! reports whether the file is out of date.
//!
//! ## Exit Codes
//!
//! - `0`: the file already matches, or no reviewers are configured
//! - `1`: the file would change (or an error occurred)
//!
//! This command is a safe, read-only operation suitable for CI.

use anyhow::Result;
use clap::Args;
use codeowners_migrate::exit_codes;
use codeowners_migrate::migration::{self, MigrationReport};
use codeowners_migrate::output::{emoji, OutputConfig};
use codeowners_migrate::suggestions;

use super::migrate::SourceArgs;

/// Check whether the CODEOWNERS file is in sync with Dependabot reviewers
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the `check` command.
///
/// Returns exit code 1 when the managed section differs from the configuration.
pub fn execute(args: CheckArgs, output: &OutputConfig) -> Result<u8> {
    let options = args.source.to_options(true)?;
    let report = migration::run(&options).map_err(suggestions::explain)?;

    args.source.check_coverage(&options, &report)?;

    if args.source.json {
        println!("{}", report.to_json()?);
    } else if !args.source.quiet {
        print_summary(output, &report);
    }

    Ok(if report.has_changes() {
        exit_codes::FAILURE
    } else {
        exit_codes::SUCCESS
    })
}

fn print_summary(output: &OutputConfig, report: &MigrationReport) {
    if !report.has_changes() {
        println!(
            "{}",
            codeowners_migrate::output::summary_line(output, report)
        );
        return;
    }

    println!(
        "{} {} is out of date",
        emoji(output, "⚠️ ", "[STALE]"),
        report.codeowners_path.display()
    );
    println!();
    println!("Expected managed section:");
    for rule in &report.rules {
        println!("  {}", rule);
    }
    println!();
    println!("Run 'codeowners-migrate migrate' to update it.");
}
