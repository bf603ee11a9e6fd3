// CLI integration tests for parse, sum, and demo flows.
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_safesum");
    let mut command = Command::new(exe);
    command.env_remove("RUST_LOG");
    command
}

fn parse_json(value: &str) -> Value {
    serde_json::from_str(value).expect("valid json")
}

fn json_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_json)
        .collect()
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

#[test]
fn demo_prints_twenty_one() {
    let output = cmd().arg("demo").output().expect("demo");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "21");
    assert!(output.stderr.is_empty());
}

#[test]
fn parse_emits_one_result_per_input() {
    let output = cmd()
        .args(["parse", "123", "12a"])
        .output()
        .expect("parse");
    assert!(output.status.success());

    let results = json_lines(&output.stdout);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["value"], 123);
    assert_eq!(results[1]["input"], "12a");
    assert!(results[1]["value"].is_null());
    assert_eq!(results[1]["error"], "NotNumericText");

    let notices = json_lines(&output.stderr);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["notice"]["message"], "Input a numeric string!");
}

#[test]
fn parse_json_reaches_wrong_type_path() {
    let output = cmd()
        .args(["parse", "--json", "5", "\"77\""])
        .output()
        .expect("parse");
    assert!(output.status.success());

    let results = json_lines(&output.stdout);
    assert_eq!(results[0]["error"], "WrongArgumentType");
    assert_eq!(results[1]["value"], 77);

    let notices = json_lines(&output.stderr);
    assert_eq!(notices[0]["notice"]["message"], "Wrong argument type!");
    assert_eq!(notices[0]["notice"]["details"]["type"], "number");
}

#[test]
fn parse_json_rejects_malformed_argument() {
    let output = cmd()
        .args(["parse", "--json", "12a"])
        .output()
        .expect("parse");
    assert_eq!(output.status.code(), Some(2));
    let err = parse_json(String::from_utf8_lossy(&output.stderr).trim());
    assert_eq!(err["error"]["kind"], "Usage");
}

#[test]
fn sum_inline_skips_text_elements() {
    let output = cmd()
        .args(["sum", r#"[1, "x", 2]"#])
        .output()
        .expect("sum");
    assert!(output.status.success());

    let report = parse_json(String::from_utf8_lossy(&output.stdout).trim());
    assert_eq!(report["total"], 3);
    assert_eq!(report["skipped"][0]["index"], 1);
    assert_eq!(report["skipped"][0]["type"], "string");

    let notices = json_lines(&output.stderr);
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0]["notice"]["message"],
        "List contains a non integer type. Sum will skip this element."
    );
}

#[test]
fn sum_reads_stdin_and_prints_plain_total() {
    let output = run_with_stdin(&["sum", "--plain"], "[2, 6, 12, true]\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "21");
}

#[test]
fn sum_reads_file_with_reject_policy() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("values.json");
    std::fs::write(&path, "[2, 6, 12, true]").expect("write");

    let output = cmd()
        .args([
            "sum",
            "--file",
            path.to_str().unwrap(),
            "--bools",
            "reject",
            "--plain",
        ])
        .output()
        .expect("sum");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "20");
    assert_eq!(json_lines(&output.stderr).len(), 1);
}

#[test]
fn sum_empty_array_is_zero() {
    let output = cmd().args(["sum", "--plain", "[]"]).output().expect("sum");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0");
}

#[test]
fn sum_keeps_totals_past_i64() {
    let output = cmd()
        .args(["sum", "[9223372036854775807, 1, -5]"])
        .output()
        .expect("sum");
    assert!(output.status.success());
    let report = parse_json(String::from_utf8_lossy(&output.stdout).trim());
    assert_eq!(report["total"], 9_223_372_036_854_775_803u64);
    assert!(output.stderr.is_empty());

    let output = cmd()
        .args(["sum", "--plain", "[18446744073709551615, 18446744073709551615]"])
        .output()
        .expect("sum");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "36893488147419103230"
    );
}

#[test]
fn parse_accepts_non_ascii_decimal_digits() {
    let output = cmd()
        .args(["parse", "\u{0661}\u{0662}\u{0663}", "\u{FF11}\u{FF12}"])
        .output()
        .expect("parse");
    assert!(output.status.success());
    let results = json_lines(&output.stdout);
    assert_eq!(results[0]["value"], 123);
    assert_eq!(results[1]["value"], 12);
    assert!(output.stderr.is_empty());
}

#[test]
fn color_flag_is_accepted_after_subcommand() {
    let output = cmd()
        .args(["sum", "--color", "never", "--plain", "[1]"])
        .output()
        .expect("sum");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

#[test]
fn sum_missing_file_is_io_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("missing.json");
    let output = cmd()
        .args(["sum", "--file", path.to_str().unwrap()])
        .output()
        .expect("sum");
    assert_eq!(output.status.code(), Some(7));
    let err = parse_json(String::from_utf8_lossy(&output.stderr).trim());
    assert_eq!(err["error"]["kind"], "Io");
    assert!(err["error"]["causes"].is_array());
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let output = cmd().arg("nope").output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    let err = parse_json(String::from_utf8_lossy(&output.stderr).trim());
    assert_eq!(err["error"]["kind"], "Usage");
}
