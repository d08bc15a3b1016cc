//! Exit codes and output of the `hwdiag` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn hwdiag() -> Command {
    let mut cmd = cargo_bin_cmd!("hwdiag");
    cmd.env_remove("RUST_LOG")
        .env_remove("HWDIAG_KNOWLEDGE_BASE")
        .env_remove("HWDIAG_LOG_LEVEL")
        .env_remove("HWDIAG_BUILTIN_EXCLUSIONS");
    cmd
}

/// Test: the bundled knowledge base is listed without any configuration
#[test]
fn test_cli_list() {
    hwdiag()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. The computer won't turn on"))
        .stdout(predicate::str::contains(" 12. No signal message on the monitor"));
}

/// Test: a perfect match prints one result and exits 0
#[test]
fn test_cli_single_match() {
    hwdiag()
        .args(["1", "2", "4"])
        .assert()
        .success()
        .stdout("Inference Result:\nPossibility: Power supply failure (Match-degree: 100%)\n");
}

/// Test: a contradiction is a verdict, not a failure
#[test]
fn test_cli_contradiction_exits_zero() {
    hwdiag()
        .args(["2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot show together"));
}

/// Test: no selection exits 2 with the input error
#[test]
fn test_cli_empty_selection() {
    hwdiag()
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Input error: Please show alternative options",
        ));
}

/// Test: an unknown selection exits 2
#[test]
fn test_cli_unknown_selection() {
    hwdiag()
        .args(["1", "99"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown condition: 99"));
}

/// Test: --json prints the tagged verdict
#[test]
fn test_cli_json() {
    hwdiag()
        .args(["--json", "5", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""verdict": "ranked_list""#))
        .stdout(predicate::str::contains("Memory (RAM) failure"));
}

/// Test: a missing knowledge base degrades to an empty one
#[test]
fn test_cli_missing_knowledge_base() {
    let dir = tempfile::tempdir().unwrap();
    hwdiag()
        .arg("--knowledge-base")
        .arg(dir.path().join("missing.json"))
        .arg("--list")
        .assert()
        .success()
        .stdout("\n");
}

/// Test: an invalid log level is a configuration error
#[test]
fn test_cli_invalid_log_level() {
    hwdiag()
        .env("HWDIAG_LOG_LEVEL", "loud")
        .arg("1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown log level 'loud'"));
}
