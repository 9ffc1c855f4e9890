//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("LEDE_LOG_DIR", std::env::temp_dir().join("lede-cli-tests"));
    cmd
}

const LEAD: &str = "Rust is a systems programming language that focuses on memory safety, \
    fearless concurrency and zero cost abstractions, and it achieves these goals through an \
    ownership model that the compiler checks at build time for every program.";
const MIDDLE: &str = "The ownership model means that every value in a Rust program has a single \
    owner, and when that owner goes out of scope the value is dropped automatically, which \
    removes the need for a garbage collector entirely.";
const CLOSING: &str = "In short, the combination of ownership, borrowing and a strict compiler \
    gives Rust programs predictable performance and strong memory safety guarantees, which is \
    why the language keeps growing in systems programming.";

fn article() -> String {
    format!("{LEAD} Short aside here. {MIDDLE} {CLOSING}")
}

fn write_article(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn summarize_json(args: &[&str], stdin: &str) -> serde_json::Value {
    let output = cmd()
        .args(["--json", "summarize"])
        .args(args)
        .write_stdin(stdin.to_string())
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).expect("summarize --json should output valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("summarize"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LEDE_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Summarize
// =============================================================================

#[test]
fn summarize_file_prints_summary_and_stats() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_article(&tmp, "article.txt", &article());

    cmd()
        .args(["--color", "never", "summarize", "-n", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(LEAD))
        .stdout(predicate::str::contains("Input"))
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Compression"))
        .stdout(predicate::str::contains("Short aside").not());
}

#[test]
fn summarize_reads_stdin() {
    let json = summarize_json(&["-n", "1"], &article());
    assert_eq!(json["requested_length"], 1);
    assert_eq!(json["sentences"].as_array().unwrap().len(), 1);
    assert_eq!(json["summary"], LEAD);
}

#[test]
fn summarize_dash_reads_stdin() {
    let json = summarize_json(&["-", "-n", "1"], &article());
    assert_eq!(json["summary"], LEAD);
}

#[test]
fn summarize_keeps_document_order() {
    let json = summarize_json(&["-n", "3"], &article());
    let ordinals: Vec<u64> = json["sentences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["ordinal"].as_u64().unwrap())
        .collect();
    assert_eq!(ordinals, vec![0, 2, 3]);
    assert_eq!(json["summary"], format!("{LEAD} {MIDDLE} {CLOSING}"));
    assert_eq!(json["input_stats"]["sentences"], 4);
    assert_eq!(json["scorable_sentences"], 3);
}

#[test]
fn summarize_length_is_clamped() {
    let json = summarize_json(&["-n", "0"], &article());
    assert_eq!(json["requested_length"], 1);

    let json = summarize_json(&["-n", "50"], &article());
    assert_eq!(json["requested_length"], 20);
    assert_eq!(json["sentences"].as_array().unwrap().len(), 3);
}

#[test]
fn summarize_show_scores() {
    cmd()
        .args(["--color", "never", "summarize", "-n", "1", "--show-scores"])
        .write_stdin(article())
        .assert()
        .success()
        .stdout(predicate::str::contains("[0 "));
}

#[test]
fn summarize_markdown_file() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = format!("# A Title\n\n{LEAD}\n\n```\nlet code = 1;\n```\n\n{CLOSING}\n");
    let path = write_article(&tmp, "notes.md", &doc);

    let output = cmd()
        .args(["--json", "summarize", "-n", "5"])
        .arg(&path)
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("valid JSON");
    assert_eq!(json["input_stats"]["sentences"], 2);
    assert!(!json["summary"].as_str().unwrap().contains("Title"));
}

#[test]
fn summarize_empty_input_fails() {
    cmd()
        .arg("summarize")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input text is empty"));
}

#[test]
fn summarize_only_short_sentences_fails() {
    cmd()
        .arg("summarize")
        .write_stdin("Short one. Another short one.")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least 30 words"));
}

#[test]
fn summarize_only_stop_words_fails() {
    cmd()
        .arg("summarize")
        .write_stdin("The and of. It is what it is.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid words"));
}

#[test]
fn summarize_missing_file_fails() {
    cmd()
        .args(["summarize", "/nonexistent/article.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn summarize_is_deterministic() {
    let first = summarize_json(&["-n", "2"], &article());
    let second = summarize_json(&["-n", "2"], &article());
    assert_eq!(first, second);
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn stats_from_stdin() {
    cmd()
        .args(["--color", "never", "stats"])
        .write_stdin("One two three. Four five.")
        .assert()
        .success()
        .stdout(predicate::str::contains("25 chars, 5 words, 2 sentences"));
}

#[test]
fn stats_json() {
    let output = cmd()
        .args(["stats", "--json"])
        .write_stdin("One two three. Four five.")
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("valid JSON");
    assert_eq!(json["words"], 5);
    assert_eq!(json["sentences"], 2);
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["scoring"].is_object());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Input Limit
// =============================================================================

#[test]
fn oversized_file_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_article(&tmp, "article.txt", &article());

    cmd()
        .env("LEDE_MAX_INPUT_BYTES", "64")
        .arg("summarize")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn oversized_stdin_is_rejected() {
    cmd()
        .env("LEDE_MAX_INPUT_BYTES", "64")
        .arg("stats")
        .write_stdin(article())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_limit_accepts_large_input() {
    cmd()
        .env("LEDE_MAX_INPUT_BYTES", "64")
        .env("LEDE_DISABLE_INPUT_LIMIT", "true")
        .arg("stats")
        .write_stdin(article())
        .assert()
        .success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_sentence_count_shows_error() {
    cmd()
        .args(["summarize", "-n", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
