//! Implementation of `iban countries`.
//!
//! Lists every registry country in code order. Human mode prints
//! `<code> <length> <mask>` lines (e.g. `FR 27 4-4-4-4-4-4-3`); JSON mode
//! prints one object per country.
use std::io::Write;

use iban_core::Country;
use serde::Serialize;

use crate::error::CliError;
use crate::format::{FormatMode, write_json_line};

#[derive(Serialize)]
struct CountryRecord {
    code: &'static str,
    name: &'static str,
    length: usize,
    mask: String,
}

/// Runs the `countries` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] when stdout cannot be written.
pub fn run(mode: FormatMode) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_countries(&mut stdout.lock(), mode).map_err(|e| CliError::stream("stdout", &e))
}

fn write_countries<W: Write>(writer: &mut W, mode: FormatMode) -> std::io::Result<()> {
    for &country in Country::ALL {
        let mask = country.format_mask();
        match mode {
            FormatMode::Human => {
                writeln!(writer, "{} {} {mask}", country.code(), country.iban_length())?;
            }
            FormatMode::Json => write_json_line(
                writer,
                &CountryRecord {
                    code: country.code(),
                    name: country.name(),
                    length: country.iban_length(),
                    mask: mask.to_string(),
                },
            )?,
        }
    }
    Ok(())
}
