//! Integration tests for `iban countries`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `iban` binary.
fn iban_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("iban");
    path
}

fn iban(args: &[&str]) -> Output {
    Command::new(iban_bin())
        .args(args)
        .env_remove("IBAN_LOG")
        .output()
        .expect("run iban")
}

#[test]
fn countries_lists_registry() {
    let out = iban(&["countries"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), iban_core::Country::ALL.len());
    assert!(stdout.lines().any(|l| l == "FR 27 4-4-4-4-4-4-3"), "{stdout}");
    assert!(stdout.lines().any(|l| l == "GB 22 4-4-4-4-4-2"), "{stdout}");
}

#[test]
fn countries_json_is_ndjson() {
    let out = iban(&["countries", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
        assert!(value["code"].is_string());
        assert!(value["length"].is_u64());
    }
}

#[test]
fn version_flag_prints_version() {
    let out = iban(&["--version"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("iban "), "{stdout}");
}
