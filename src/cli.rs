//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use codeowners_migrate::output::OutputConfig;

/// Migrate Dependabot reviewers into a managed CODEOWNERS section
#[derive(Parser, Debug)]
#[command(name = "codeowners-migrate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write Dependabot reviewers into the CODEOWNERS file
    Migrate(commands::migrate::MigrateArgs),

    /// Check whether the CODEOWNERS file matches the Dependabot reviewers
    Check(commands::check::CheckArgs),

    /// List supported package ecosystems and their manifest files
    Ecosystems(commands::ecosystems::EcosystemsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> Result<u8> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Migrate(args) => commands::migrate::execute(args, &output),
            Commands::Check(args) => commands::check::execute(args, &output),
            Commands::Ecosystems(args) => commands::ecosystems::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr, filtered by `RUST_LOG` or `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init();
}
