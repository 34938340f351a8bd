//! Manifest pattern resolution
//!
//! Maps a Dependabot `package-ecosystem` identifier and an update directory
//! to the CODEOWNERS path patterns that cover that ecosystem's manifest files.
//!
//! Exact filenames resolve to a single pattern in the update directory.
//! Wildcard filenames resolve to a direct pattern plus a `**/` pattern so that
//! nested workspace members are covered too:
//!
//! ```
//! use codeowners_migrate::ecosystems::ManifestTable;
//!
//! let patterns = ManifestTable::builtin().resolve("terraform", "/infra/");
//! assert!(patterns.contains("/infra/*.tf"));
//! assert!(patterns.contains("/infra/**/*.tf"));
//! ```

use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

const DOTNET_MANIFESTS: &[&str] = &[
    "*.csproj",
    "*.fsproj",
    "*.vbproj",
    "*.sln",
    "packages.config",
    "global.json",
];

const NUGET_MANIFESTS: &[&str] = &[
    "*.csproj",
    "*.fsproj",
    "*.vbproj",
    "*.sln",
    "packages.config",
    "global.json",
    "Directory.Build.props",
    "Directory.Packages.props",
];

/// Manifest filename globs per ecosystem.
const BUILTIN_MANIFESTS: &[(&str, &[&str])] = &[
    ("bundler", &["Gemfile", "Gemfile.lock", "*.gemspec"]),
    ("bun", &["package.json", "bun.lockb"]),
    (
        "npm",
        &[
            "package.json",
            "package-lock.json",
            "npm-shrinkwrap.json",
            "yarn.lock",
            "pnpm-lock.yaml",
        ],
    ),
    ("cargo", &["Cargo.toml", "Cargo.lock"]),
    ("composer", &["composer.json", "composer.lock"]),
    (
        "devcontainers",
        &[".devcontainer/devcontainer.json", ".devcontainer.json"],
    ),
    ("docker", &["Dockerfile", "Dockerfile.*", "*.dockerfile"]),
    (
        "docker-compose",
        &[
            "docker-compose.yml",
            "docker-compose.yaml",
            "compose.yml",
            "compose.yaml",
        ],
    ),
    ("dotnet-sdk", DOTNET_MANIFESTS),
    ("nuget", NUGET_MANIFESTS),
    ("elm", &["elm.json"]),
    (
        "github-actions",
        &[
            ".github/workflows/*.yml",
            ".github/workflows/*.yaml",
            "action.yml",
            "action.yaml",
        ],
    ),
    ("gitsubmodule", &[".gitmodules"]),
    ("gomod", &["go.mod", "go.sum"]),
    (
        "gradle",
        &[
            "build.gradle",
            "build.gradle.kts",
            "gradle.properties",
            "settings.gradle",
            "settings.gradle.kts",
        ],
    ),
    ("maven", &["pom.xml", "*.pom"]),
    (
        "helm",
        &["Chart.yaml", "Chart.yml", "values.yaml", "values.yml"],
    ),
    ("mix", &["mix.exs", "mix.lock"]),
    (
        "pip",
        &[
            "requirements.txt",
            "requirements/*.txt",
            "setup.py",
            "setup.cfg",
            "pyproject.toml",
            "Pipfile",
            "Pipfile.lock",
        ],
    ),
    ("uv", &["pyproject.toml", "uv.lock"]),
    ("pub", &["pubspec.yaml", "pubspec.yml", "pubspec.lock"]),
    ("swift", &["Package.swift", "Package.resolved"]),
    ("terraform", &["*.tf", "*.tfvars", "*.hcl"]),
];

static BUILTIN: LazyLock<ManifestTable> =
    LazyLock::new(|| ManifestTable::from_rows(BUILTIN_MANIFESTS));

/// Immutable ecosystem -> manifest glob mapping.
#[derive(Debug, Clone)]
pub struct ManifestTable {
    rows: BTreeMap<&'static str, &'static [&'static str]>,
}

impl ManifestTable {
    /// The table of ecosystems Dependabot supports, built once per process.
    pub fn builtin() -> &'static ManifestTable {
        &BUILTIN
    }

    /// Build a table from static rows. Later rows replace earlier ones.
    pub fn from_rows(rows: &[(&'static str, &'static [&'static str])]) -> Self {
        Self {
            rows: rows.iter().copied().collect(),
        }
    }

    /// Manifest globs for `ecosystem`, or `None` if it is not known.
    pub fn manifests(&self, ecosystem: &str) -> Option<&'static [&'static str]> {
        self.rows.get(ecosystem).copied()
    }

    /// Known ecosystem identifiers in sorted order.
    pub fn ecosystems(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve the ownership patterns for one ecosystem under one directory.
    ///
    /// Returns an empty set when the ecosystem is unknown; callers treat that
    /// as "nothing to emit" rather than an error.
    pub fn resolve(&self, ecosystem: &str, directory: &str) -> BTreeSet<String> {
        let Some(manifests) = self.manifests(ecosystem) else {
            debug!("Unknown ecosystem '{}'; no manifest patterns", ecosystem);
            return BTreeSet::new();
        };

        let root = escape_spaces(&normalize_directory(directory));
        let mut patterns = BTreeSet::new();
        for manifest in manifests {
            patterns.insert(format!("{}/{}", root, manifest));
            if has_wildcard(manifest) && !manifest.starts_with("**/") {
                patterns.insert(format!("{}/**/{}", root, manifest));
            }
        }
        patterns
    }
}

/// Normalize an update directory into a prefix for pattern concatenation.
///
/// The repository root becomes the empty string; anything else gets exactly
/// one leading `/` and no trailing `/`.
pub fn normalize_directory(directory: &str) -> String {
    let trimmed = directory.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Escape spaces as `\ ` so a pattern stays one CODEOWNERS field.
pub fn escape_spaces(path: &str) -> String {
    if path.contains(' ') {
        debug!("Escaping spaces in '{}'", path);
    }
    path.replace(' ', "\\ ")
}

/// Whether a glob contains `*` or `?`.
pub fn has_wildcard(glob: &str) -> bool {
    glob.contains(['*', '?'])
}
