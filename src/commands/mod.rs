//! # CLI Command Implementations
//!
//! Each subcommand of `codeowners-migrate` lives in its own file with:
//! - an `Args` struct derived with `clap`
//! - an `execute` function that calls into the `codeowners_migrate` library
//!   and returns the process exit code

pub mod check;
pub mod completions;
pub mod ecosystems;
pub mod migrate;
