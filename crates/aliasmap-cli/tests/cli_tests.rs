//! Process-level behavior of the aliasmap binary
//!
//! Run with: cargo test --package aliasmap-cli --test cli_tests

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn aliasmap(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_aliasmap"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn aliasmap");

    // The process may exit before reading stdin (e.g. bad config)
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("wait for aliasmap")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_segment_rename() {
    let output = aliasmap(&["--workers", "1"], r#"[["a","x"]] {"a.b.c": 1}"#);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[[\"x.b.c\",\"a.b.c\"]]\n");
}

#[test]
fn test_unaligned_alias_empty_output() {
    let output = aliasmap(&[], r#"[["oo","zz"]] {"foo.bar": 1}"#);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[]\n");
}

#[test]
fn test_pattern_with_leading_dot() {
    let output = aliasmap(&["--workers", "2"], "[[\".b\",\".q\"]]\n{\"a.b\": {}}\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[[\"a.q\",\"a.b\"]]\n");
}

#[test]
fn test_null_entries_discarded() {
    let output = aliasmap(
        &["--workers", "1"],
        r#"[[null,"q"],["a",null],["a","x"]] {"a.b": 0}"#,
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[[\"x.b\",\"a.b\"]]\n");
}

#[test]
fn test_fixed_point_strategy_flag() {
    let output = aliasmap(
        &["--workers", "1", "--strategy", "fixed-point"],
        r#"[["b","c"],["a","b"]] {"a.k": 0}"#,
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[[\"b.k\",\"a.k\"],[\"c.k\",\"a.k\"]]\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = aliasmap(&["-v", "--workers", "2"], r#"[["a","x"],["c","z"]] {"a.b": 0}"#);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[[\"x.b\",\"a.b\"]]\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expansion pass complete"), "stderr was: {stderr}");
}

#[test]
fn test_malformed_input_fails_without_output() {
    let output = aliasmap(&[], r#"[["a", 5]] {"a.b": 0}"#);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("malformed input"));
}

#[test]
fn test_missing_second_payload_fails() {
    let output = aliasmap(&[], r#"[["a","x"]]"#);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_config_file_fails() {
    let output = aliasmap(&["--config", "/nonexistent/aliasmap.toml"], "[] {}");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
