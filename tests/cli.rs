//! Binary-level integration tests
//!
//! These only exercise paths that fail before any network request is made.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git is available");
    assert!(status.success(), "git {:?} failed", args);
}

/// A throwaway repository with one staged file
fn repo_with_staged_file() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    git(dir.path(), &["config", "user.name", "test"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    std::fs::write(dir.path().join("hello.txt"), "hello\n").unwrap();
    git(dir.path(), &["add", "hello.txt"]);
    dir
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("git-commit-message").unwrap();
    // Keep host configuration out of the test
    for var in [
        "OPENAI_API_KEY",
        "GOOGLE_API_KEY",
        "GIT_COMMIT_MESSAGE_PROVIDER",
        "GIT_COMMIT_MESSAGE_MODEL",
        "GIT_COMMIT_MESSAGE_GEMINI_MODEL",
        "GIT_COMMIT_MESSAGE_LANGUAGE",
        "OPENAI_MODEL",
        "GOOGLE_GENAI_MODEL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn fails_outside_a_git_repository() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn fails_without_staged_changes() {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no staged changes"));
}

#[test]
fn edit_flag_requires_commit_flag() {
    cmd()
        .arg("--edit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--commit"));
}

#[test]
fn zero_max_length_is_rejected() {
    let dir = repo_with_staged_file();
    cmd()
        .current_dir(dir.path())
        .args(["--max-length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn missing_api_key_names_the_variable() {
    let dir = repo_with_staged_file();
    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));

    let dir = repo_with_staged_file();
    cmd()
        .current_dir(dir.path())
        .args(["--provider", "google"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_API_KEY"));
}
