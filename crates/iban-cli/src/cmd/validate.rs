//! Implementation of `iban validate [IBAN]... [--input FILE]`.
//!
//! Validates every IBAN given on the command line, then every non-blank line
//! of the input file (or stdin for `-`), emitting diagnostics and a summary
//! to stderr.
//!
//! Exit codes:
//! - 0 = every IBAN is valid
//! - 1 = at least one IBAN has a violation
//! - 2 = input failure, or nothing to validate
use std::io::Write;
use std::time::Instant;

use tracing::debug;

use crate::PathOrStdin;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, Summary, write_diagnostic, write_summary, write_timing_human,
};
use crate::io::{iban_lines, read_input};

/// Runs the `validate` command.
///
/// # Errors
///
/// - Any input failure from [`read_input`] (exit code 2).
/// - [`CliError::NoInput`] when there is nothing to validate.
/// - [`CliError::ValidationErrors`] when at least one IBAN is invalid.
pub fn run(
    ibans: &[String],
    input: Option<&PathOrStdin>,
    max_file_size: u64,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let content = match input {
        Some(source) => read_input(source, max_file_size)?,
        None => String::new(),
    };
    let candidates: Vec<&str> = ibans
        .iter()
        .map(String::as_str)
        .chain(iban_lines(&content))
        .collect();
    if candidates.is_empty() {
        return Err(CliError::NoInput);
    }

    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();

    let started = Instant::now();
    let summary = check_all(&mut err_out, &candidates, mode, config)
        .map_err(|e| CliError::stream("stderr", &e))?;
    debug!(
        checked = summary.checked,
        invalid = summary.invalid,
        "validation finished"
    );

    write_summary(&mut err_out, summary, mode, config)
        .map_err(|e| CliError::stream("stderr", &e))?;
    if mode == FormatMode::Human {
        let label = format!("validated {} IBANs", summary.checked);
        write_timing_human(&mut err_out, &label, started.elapsed(), config)
            .map_err(|e| CliError::stream("stderr", &e))?;
    }

    if summary.invalid > 0 {
        Err(CliError::ValidationErrors {
            invalid: summary.invalid,
            checked: summary.checked,
        })
    } else {
        Ok(())
    }
}

/// Validates each candidate, writing one diagnostic per violation.
fn check_all<W: Write>(
    writer: &mut W,
    candidates: &[&str],
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<Summary> {
    let mut summary = Summary::default();
    for iban in candidates {
        let violations = iban_core::validate(iban);
        for violation in &violations {
            write_diagnostic(writer, iban, violation, mode, config)?;
        }
        summary.record(violations.is_empty());
    }
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn plain() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn check(candidates: &[&str], mode: FormatMode) -> (Summary, String) {
        let mut buf: Vec<u8> = Vec::new();
        let summary = check_all(&mut buf, candidates, mode, &plain()).expect("write");
        (summary, String::from_utf8(buf).expect("utf8"))
    }

    #[test]
    fn valid_ibans_emit_nothing() {
        let (summary, out) = check(
            &["DE44500105175407324931", "gb82 west 1234 5698 7654 32"],
            FormatMode::Human,
        );
        assert_eq!(
            summary,
            Summary {
                checked: 2,
                valid: 2,
                invalid: 0
            }
        );
        assert!(out.is_empty(), "output: {out}");
    }

    #[test]
    fn each_violation_gets_a_line() {
        let (summary, out) = check(&["FR283000300030933262739123"], FormatMode::Human);
        assert_eq!(summary.invalid, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2, "output: {out}");
        assert!(lines[0].starts_with("[E] country-length  FR283000300030933262739123: "));
        assert!(lines[1].starts_with("[E] checksum  FR283000300030933262739123: "));
    }

    #[test]
    fn diagnostics_keep_the_iban_as_written() {
        let (_, out) = check(&["fr28 3000 3000 3093 3262 7391 239"], FormatMode::Human);
        assert!(out.contains("fr28 3000 3000 3093 3262 7391 239:"), "output: {out}");
    }

    #[test]
    fn json_mode_emits_ndjson() {
        let (summary, out) = check(
            &["DE44500105175407324931", "ZZ1730003000309332627391239"],
            FormatMode::Json,
        );
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
        for line in out.lines() {
            let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
            assert_eq!(value["iban"], "ZZ1730003000309332627391239");
        }
        assert!(out.contains(r#""rule_id":"known-country-code""#), "output: {out}");
    }

    #[test]
    fn empty_candidate_is_invalid() {
        let (summary, out) = check(&[""], FormatMode::Human);
        assert_eq!(summary.invalid, 1);
        assert!(out.contains("checksum"), "output: {out}");
    }
}
