//! CLI Interface E2E Tests
//!
//! These tests run the `lox` binary and check its output and exit status
//! for script mode, prompt mode and command-line errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A `lox` command isolated from any config file and logging environment
fn lox() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lox"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("LOX_CONFIG")
        .env_remove("LOX_LOG")
        .env_remove("LOX_VERBOSE")
        .env("LOX_NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help() {
    lox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("lox")));
}

#[test]
fn test_cli_version() {
    lox()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_scan_file() {
    lox()
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stdout(predicate::str::contains("VAR var null"))
        .stdout(predicate::str::contains("STRING \"hello\" hello"))
        .stdout(predicate::str::contains("PLUS + null"))
        .stdout(predicate::str::ends_with("EOF  null\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_lexical_errors_exit_65() {
    lox()
        .arg(fixtures_dir().join("errors.lox"))
        .assert()
        .code(65)
        .stdout(predicate::str::contains("VAR var null"))
        .stderr(predicate::str::contains(
            "[line 2] Error[E1001] at '@': Unexpected character.",
        ))
        .stderr(predicate::str::contains(
            "[line 4] Error[E1002] at end: Unterminated string.",
        ));
}

#[test]
fn test_cli_missing_file_exit_74() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    lox()
        .arg(temp_dir.path().join("missing.lox"))
        .assert()
        .code(74)
        .stderr(predicate::str::contains("Could not read"));
}

#[test]
fn test_cli_too_many_arguments_exit_64() {
    lox()
        .arg("a.lox")
        .arg("b.lox")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage: lox [script]"));
}

#[test]
fn test_cli_unknown_flag_exit_64() {
    lox().arg("--frobnicate").assert().code(64);
}

#[test]
fn test_cli_emit_json() {
    let output = lox()
        .arg("--emit")
        .arg("json")
        .arg(fixtures_dir().join("hello.lox"))
        .output()
        .expect("Failed to run lox");
    assert!(output.status.success());

    let tokens: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let tokens = tokens.as_array().expect("top level should be an array");
    assert_eq!(tokens[0]["kind"], "VAR");
    assert_eq!(tokens[0]["line"], 2);
    assert_eq!(tokens.last().map(|t| t["kind"].clone()), Some("EOF".into()));
}

#[test]
fn test_cli_emit_none() {
    lox()
        .args(["--emit", "none"])
        .arg(fixtures_dir().join("errors.lox"))
        .assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unexpected character."));
}

#[test]
fn test_cli_nested_comments_flag() {
    lox()
        .arg(fixtures_dir().join("nested.lox"))
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTIFIER still null"));

    lox()
        .arg("--nested-comments")
        .arg(fixtures_dir().join("nested.lox"))
        .assert()
        .success()
        .stdout(predicate::str::contains("still").not())
        .stdout(predicate::str::contains("FUN fun null"))
        .stdout(predicate::str::contains("NUMBER 3.5 3.5"));
}

#[test]
fn test_cli_unicode_idents_flag() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let script = temp_dir.path().join("unicode.lox");
    std::fs::write(&script, "var café = 1;").expect("Failed to write script");

    lox().arg(&script).assert().code(65);

    lox()
        .arg("--unicode-idents")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTIFIER café null"));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("lox.toml");
    std::fs::write(&config, "[scanner]\nnested_comments = true\n\n[output]\nemit = \"none\"\n")
        .expect("Failed to write config");

    lox()
        .arg("--config")
        .arg(&config)
        .arg(fixtures_dir().join("nested.lox"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_bad_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("lox.toml");
    std::fs::write(&config, "[output]\nemit = 3\n").expect("Failed to write config");

    lox()
        .arg("--config")
        .arg(&config)
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .code(78)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cli_prompt() {
    lox()
        .write_stdin("print 1;\n@\nnil\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("> "))
        .stdout(predicate::str::contains("PRINT print null"))
        .stdout(predicate::str::contains("NIL nil null"))
        .stderr(predicate::str::contains("[line 1] Error[E1001] at '@'"));
}

#[test]
fn test_cli_prompt_empty_stdin() {
    lox().write_stdin("").assert().success().stdout("> \n");
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    lox()
        .arg("--verbose")
        .arg(fixtures_dir().join("hello.lox"))
        .assert()
        .success()
        .stderr(predicate::str::contains("scanning script"));
}
