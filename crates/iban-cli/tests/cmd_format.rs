//! Integration tests for `iban format`.
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

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn format_prints_display_form() {
    let out = iban(&["format", "fr2730003000309332627391239"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "FR27 3000 3000 3093 3262 7391 239\n");
}

#[test]
fn format_uses_seychelles_mask() {
    let out = iban(&["format", "SC18SSCB11010000000000001497USD"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "SC18 SSCB 11 01 0000 0000 0000 1497 USD\n");
}

#[test]
fn format_several_ibans_in_order() {
    let out = iban(&["format", "NO9386011117947", "DE44 5001 0517 5407 3249 31"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "NO93 8601 1117 947\nDE44 5001 0517 5407 3249 31\n"
    );
}

#[test]
fn format_unknown_country_exits_1() {
    let out = iban(&["format", "ZZ1730003000309332627391239"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("known-country-code"), "stderr: {err}");
}

#[test]
fn format_strict_rejects_bad_checksum() {
    let lenient = iban(&["format", "FR2830003000309332627391239"]);
    assert_eq!(lenient.status.code(), Some(0));
    let strict = iban(&["format", "--strict", "FR2830003000309332627391239"]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(strict.stdout.is_empty());
}

#[test]
fn format_json_records() {
    let out = iban(&["format", "-f", "json", "GB82WEST12345698765432"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_str(stdout(&out).trim()).expect("valid JSON");
    assert_eq!(value["country"], "GB");
    assert_eq!(value["formatted"], "GB82 WEST 1234 5698 7654 32");
}

#[test]
fn format_without_argument_is_usage_error() {
    let out = iban(&["format"]);
    assert_eq!(out.status.code(), Some(2));
}
