//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn roster(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    // Run away from any .env in the workspace
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("ROSTER_BIND")
        .env_remove("ROSTER_MAX_CONNECTIONS");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_serve_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir)
        .args(["serve", "--in-memory", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}
