//! Integration tests for one-shot and interactive invocation

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn aliasman(home: &std::path::Path, shell: &str) -> Command {
    let mut cmd = Command::cargo_bin("aliasman").unwrap();
    cmd.env("HOME", home).env("SHELL", shell);
    cmd
}

#[test]
fn test_one_shot_create_confirmed() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .args(["create", "gp", "git push"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias 'gp' saved"));

    let content = fs::read_to_string(home.path().join(".bashrc")).unwrap();
    assert!(content.contains("alias gp='git push'"));
}

#[test]
fn test_one_shot_create_declined() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .args(["create", "gp", "git push"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias creation cancelled."));

    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn test_zsh_shell_selects_zshrc() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/usr/bin/zsh")
        .args(["create", "ll", "ls -la"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(home.path().join(".zshrc").exists());
    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn test_invalid_argument_shape_prints_usage() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .args(["delete", "gp"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Alias Wizard Usage"));
}

#[test]
fn test_create_with_missing_command_prints_usage() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .args(["create", "gp"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Alias Wizard Usage"));
}

#[test]
fn test_interactive_exit_leaves_no_trace() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn test_interactive_eof_exits_cleanly() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn test_catalog_out_of_range_choice_is_harmless() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .write_stdin("2\n99\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains("Goodbye!"));

    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn test_create_then_modify_lists_single_alias() {
    let home = tempdir().unwrap();
    fs::write(home.path().join(".bashrc"), "").unwrap();

    // Create ll, then open the modify flow and cancel out of it
    aliasman(home.path(), "/bin/bash")
        .write_stdin("1\nll\nls -la\ny\n3\n\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ll: ls -la"));
}

#[test]
fn test_command_with_embedded_quote_round_trips() {
    let home = tempdir().unwrap();

    aliasman(home.path(), "/bin/bash")
        .args(["create", "greet", "echo 'hi there'"])
        .write_stdin("y\n")
        .assert()
        .success();

    let content = fs::read_to_string(home.path().join(".bashrc")).unwrap();
    let set = aliasman::parse_aliases(&content);
    assert_eq!(set.get(0).unwrap().command, "echo 'hi there'");
}
