//! End-to-end tests for the `check` command
//!
//! `check` never writes and exits 1 when the managed section is stale.

mod common;
use common::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_help() {
    let mut cmd = cargo_bin_cmd!("codeowners-migrate");

    cmd.arg("check")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Check whether the CODEOWNERS file matches the Dependabot reviewers",
        ));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_missing_config() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("DEPENDABOT_CONFIG"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_stale_file_fails() {
    let fixture = TestFixture::new().with_config(configs::CARGO_ROOT);

    fixture
        .command()
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is out of date"))
        .stdout(predicate::str::contains("/Cargo.toml @alice"))
        .stdout(predicate::str::contains("codeowners-migrate migrate"));

    assert!(!fixture.codeowners_path().exists());
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_after_migrate_passes() {
    let fixture = TestFixture::new().with_config(configs::MULTI);

    fixture.command().arg("migrate").assert().success();

    fixture
        .command()
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_detects_reviewer_change() {
    let fixture = TestFixture::new().with_config(configs::CARGO_ROOT);
    fixture.command().arg("migrate").assert().success();

    fixture
        .child(".github/dependabot.yml")
        .write_str(&configs::CARGO_ROOT.replace("alice", "bob"))
        .unwrap();

    fixture.command().arg("check").assert().code(1);
    assert!(fixture.read("CODEOWNERS").contains("@alice"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_no_reviewers_passes() {
    let fixture = TestFixture::new().with_config(configs::NO_REVIEWERS);

    fixture.command().arg("check").assert().code(0);
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_check_json() {
    let fixture = TestFixture::new().with_config(configs::CARGO_ROOT);

    let output = fixture
        .command()
        .args(["check", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "updated");
    assert_eq!(report["dry_run"], true);
}
