//! Ecosystems command implementation
//!
//! Lists every `package-ecosystem` identifier the resolver knows, together
//! with the manifest globs that become CODEOWNERS patterns.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::BTreeMap;

use codeowners_migrate::ecosystems::ManifestTable;
use codeowners_migrate::exit_codes;

/// Arguments for the ecosystems command
#[derive(Args, Debug)]
pub struct EcosystemsArgs {
    /// Print the table as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Execute the ecosystems command
pub fn execute(args: EcosystemsArgs) -> Result<u8> {
    let table = ManifestTable::builtin();
    if args.json {
        println!("{}", render_json(table)?);
    } else {
        print!("{}", render_text(table));
    }
    Ok(exit_codes::SUCCESS)
}

fn render_text(table: &ManifestTable) -> String {
    let mut out = String::new();
    for ecosystem in table.ecosystems() {
        let manifests = table.manifests(ecosystem).unwrap_or_default();
        out.push_str(&format!("{}: {}\n", ecosystem, manifests.join(", ")));
    }
    out
}

fn render_json(table: &ManifestTable) -> Result<String> {
    let map: BTreeMap<&str, &[&str]> = table
        .ecosystems()
        .map(|ecosystem| (ecosystem, table.manifests(ecosystem).unwrap_or_default()))
        .collect();
    serde_json::to_string_pretty(&map).context("Failed to serialize ecosystem table")
}
