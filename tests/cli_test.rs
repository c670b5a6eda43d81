//! End-to-end tests of the optica binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Runs optica with an empty config file so user settings don't leak in.
fn run(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("test-config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    Command::new(env!("CARGO_BIN_EXE_optica"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("failed to run optica")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_lex_file_pretty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("m.optica"), "set S = {1, 2}\n").unwrap();

    let output = run(dir.path(), &["lex", "m.optica"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("L1:1"));
    assert!(first.contains("SET"));
    assert_eq!(out.lines().last().unwrap().split_whitespace().nth(1), Some("END"));
}

#[test]
fn test_lex_eval_json() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["lex", "--format", "json", "-e", "x <= 1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let tokens: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1]["kind"], "Le");
    assert_eq!(tokens[2]["kind"]["Integer"], 1);
}

#[test]
fn test_crlf_files_are_normalised() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("crlf.optica"), "a:\r\n    b\r\n").unwrap();

    let output = run(dir.path(), &["lex", "crlf.optica"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("INDENT"));
}

#[test]
fn test_multiple_files_in_argument_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("one.optica"), "model").unwrap();
    fs::write(dir.path().join("two.optica"), "param").unwrap();

    let output = run(dir.path(), &["lex", "two.optica", "one.optica"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let two = out.find("==> two.optica <==").unwrap();
    let one = out.find("==> one.optica <==").unwrap();
    assert!(two < one);
    assert!(out.find("PARAM").unwrap() < out.find("MODEL").unwrap());
}

#[test]
fn test_lexical_error_points_at_column() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.optica"), "set A\nparam @\n").unwrap();

    let output = run(dir.path(), &["lex", "bad.optica"]);
    assert!(!output.status.success());

    let err = stderr(&output);
    assert!(err.contains("bad.optica:2:7: unrecognized character '@'"), "{err}");
    assert!(err.contains("    param @\n          ^"), "{err}");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["lex", "nope.optica"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot read nope.optica"));
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("s.optica"), "x + y + z").unwrap();

    let output = run(dir.path(), &["stats", "s.optica"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "6 tokens");
    assert!(lines[1].trim_start().starts_with("IDENTIFIER"));
    assert!(lines[2].trim_start().starts_with("PLUS"));
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("json.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_optica"))
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["lex", "-e", "model"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let tokens: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tokens[0]["kind"], "Model");
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["version"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
    assert!(!out.contains("\x1b["), "escape codes with --no-color: {out:?}");
}

#[test]
fn test_no_color_headers_and_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.optica"), "model").unwrap();
    fs::write(dir.path().join("b.optica"), "'open").unwrap();

    let output = run(dir.path(), &["lex", "a.optica", "b.optica"]);
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("\x1b["));
    assert!(!stderr(&output).contains("\x1b["));
}
