//! Integration tests for the list, delete and clear commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::replog_cmd;

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_shows_entries_newest_first() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .args(["log", "--text", "older work", "--date", "2024-01-10"])
        .assert()
        .success();
    replog_cmd(temp.path())
        .args(["log", "--text", "newer work", "--date", "2024-01-20"])
        .assert()
        .success();

    let output = replog_cmd(temp.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer = stdout.find("newer work").unwrap();
    let older = stdout.find("older work").unwrap();
    assert!(newer < older);
    assert!(stdout.contains("Total entries: 2"));
}

#[test]
fn test_list_with_limit() {
    let temp = TempDir::new().unwrap();

    for day in 1..=5 {
        let date = format!("2024-01-{:02}", day);
        replog_cmd(temp.path())
            .args(["log", "--text", "work", "--date", &date])
            .assert()
            .success();
    }

    replog_cmd(temp.path())
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 2"))
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("2024-01-04"))
        .stdout(predicate::str::contains("2024-01-03").not());
}

#[test]
fn test_delete_entry() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .args(["log", "--text", "to be removed"])
        .assert()
        .success();

    replog_cmd(temp.path())
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry #1"));

    replog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_delete_missing_entry() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .args(["delete", "--id", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry with id 42"));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .args(["log", "--text", "precious data"])
        .assert()
        .success();

    // Without --yes nothing is removed
    replog_cmd(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    replog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("precious data"));
}

#[test]
fn test_clear_with_confirmation() {
    let temp = TempDir::new().unwrap();

    replog_cmd(temp.path())
        .args(["log", "--text", "one"])
        .assert()
        .success();
    replog_cmd(temp.path())
        .args(["log", "--text", "two"])
        .assert()
        .success();

    replog_cmd(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 entries"));

    replog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
