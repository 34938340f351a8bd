//! Process exit codes used by the `codeowners-migrate` binary.
//!
//! - `0`: success (including "no changes needed")
//! - `1`: failure, or changes detected for the `check` command
//! - `2`: invalid command-line usage (reported by clap)

/// The command completed successfully.
pub const SUCCESS: u8 = 0;

/// The command failed, or `check` found the ownership file out of date.
pub const FAILURE: u8 = 1;

/// Invalid command-line usage.
pub const USAGE: u8 = 2;
