//! # codeowners-migrate CLI
//!
//! This is the binary entry point for the `codeowners-migrate` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Translating errors and "changes detected" results into exit codes.
//!
//! The migration logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use clap::Parser;
use codeowners_migrate::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here, on stdout
            return ExitCode::from(if err.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            });
        }
    };
    match cli.execute() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(exit_codes::FAILURE)
        }
    }
}
