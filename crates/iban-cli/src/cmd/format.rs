//! Implementation of `iban format IBAN... [--strict]`.
//!
//! Prints the grouped display form of each IBAN to stdout, one per line (or
//! one JSON object per line in JSON mode). An IBAN whose country code cannot
//! be resolved is reported on stderr instead. With `--strict`, any IBAN that
//! fails validation is reported and not formatted.
use std::io::Write;

use iban_core::Country;
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig, write_diagnostic, write_json_line};

#[derive(Serialize)]
struct FormattedRecord<'a> {
    iban: &'a str,
    country: Option<Country>,
    formatted: &'a str,
}

/// Runs the `format` command.
///
/// # Errors
///
/// - [`CliError::FormatFailed`] when at least one IBAN was not formatted.
/// - [`CliError::IoError`] when stdout or stderr cannot be written.
pub fn run(
    ibans: &[String],
    strict: bool,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let failed = format_all(
        &mut stdout.lock(),
        &mut stderr.lock(),
        ibans,
        strict,
        mode,
        config,
    )
    .map_err(|e| CliError::stream("output", &e))?;

    if failed > 0 {
        Err(CliError::FormatFailed { failed })
    } else {
        Ok(())
    }
}

/// Formats each IBAN to `out`, reporting rejected ones to `err`. Returns the
/// number of IBANs that were not formatted.
fn format_all<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    ibans: &[String],
    strict: bool,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<usize> {
    let mut failed = 0;
    for iban in ibans {
        let formatted = if strict && !iban_core::is_valid(iban) {
            None
        } else {
            iban_core::format(iban)
        };
        let Some(formatted) = formatted else {
            for violation in &iban_core::validate(iban) {
                write_diagnostic(err, iban, violation, mode, config)?;
            }
            failed += 1;
            continue;
        };
        match mode {
            FormatMode::Human => writeln!(out, "{formatted}")?,
            FormatMode::Json => write_json_line(
                out,
                &FormattedRecord {
                    iban,
                    country: iban_core::country_code(iban),
                    formatted: &formatted,
                },
            )?,
        }
    }
    Ok(failed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
