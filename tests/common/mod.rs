//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_config(configs::CARGO_ROOT);
//! fixture.command().arg("migrate").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::MARKER;
    pub use super::TestFixture;
}

/// Marker line that opens the managed CODEOWNERS block.
#[allow(dead_code)]
pub const MARKER: &str = "# Dependabot reviewers (migrated from dependabot.yml)";

/// Common dependabot.yml snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Cargo at the repository root with one reviewer.
    pub const CARGO_ROOT: &str = r#"
version: 2
updates:
  - package-ecosystem: cargo
    directory: /
    schedule:
      interval: weekly
    reviewers:
      - alice
"#;

    /// Two ecosystems, one nested, with user and team reviewers.
    pub const MULTI: &str = r#"
version: 2
updates:
  - package-ecosystem: gomod
    directory: /
    reviewers: [alice]
  - package-ecosystem: terraform
    directory: /infra
    reviewers: [ops, "@org/platform"]
"#;

    /// Updates without any reviewers.
    pub const NO_REVIEWERS: &str = r#"
version: 2
updates:
  - package-ecosystem: npm
    directory: /
    schedule:
      interval: weekly
"#;

    /// Only an ecosystem the resolver does not know.
    pub const UNKNOWN_ONLY: &str = r#"
version: 2
updates:
  - package-ecosystem: carrier-pigeon
    directory: /
    reviewers: [alice]
"#;

    /// `updates` is not a list.
    pub const BAD_UPDATES: &str = "version: 2\nupdates: nope\n";

    /// Not YAML at all.
    pub const INVALID_YAML: &str = "updates: [unclosed";
}

/// A temporary repository checkout with an optional Dependabot configuration.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `.github/dependabot.yml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".github/dependabot.yml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the root-level CODEOWNERS file.
    #[allow(dead_code)]
    pub fn codeowners_path(&self) -> PathBuf {
        self.temp_dir.path().join("CODEOWNERS")
    }

    /// Read a file relative to the fixture root.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.temp_dir.path().join(path)).expect("Failed to read file")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    ///
    /// Variables that would redirect the tool when the suite itself runs in
    /// GitHub Actions are cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("codeowners-migrate");
        cmd.current_dir(self.path())
            .env_remove("GITHUB_OUTPUT")
            .env_remove("DEPENDABOT_CONFIG")
            .env_remove("CODEOWNERS_PATH")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::CARGO_ROOT);
        assert!(fixture.path().join(".github/dependabot.yml").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        let configs = [
            configs::CARGO_ROOT,
            configs::MULTI,
            configs::NO_REVIEWERS,
            configs::UNKNOWN_ONLY,
            configs::BAD_UPDATES,
        ];
        for config in configs {
            assert!(serde_yaml::from_str::<serde_yaml::Value>(config).is_ok());
        }
    }
}
