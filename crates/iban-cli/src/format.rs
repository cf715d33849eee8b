/// Diagnostic formatting: human-readable and JSON (NDJSON) modes.
///
/// One diagnostic is written per [`Violation`] of each rejected IBAN:
///
/// - **Human mode** (default): `[E] <rule-code>  <iban>: <message>` on
///   stderr, with the tag in red when colors are enabled. Colors are disabled
///   by `--no-color`, the `NO_COLOR` environment variable, or a non-TTY stderr.
/// - **JSON mode**: each diagnostic is a single-line JSON object.
///
/// The **quiet** flag suppresses the summary; **verbose** adds timing lines.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use iban_core::Violation;
use serde::Serialize;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the diagnostic formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress the summary line.
    pub quiet: bool,
    /// Emit timing lines.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<OutputFormat> for FormatMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Counts reported by the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// IBANs checked.
    pub checked: usize,
    /// IBANs without violations.
    pub valid: usize,
    /// IBANs with at least one violation.
    pub invalid: usize,
}

impl Summary {
    /// Records the outcome of one IBAN.
    pub fn record(&mut self, valid: bool) {
        self.checked += 1;
        if valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

#[derive(Serialize)]
struct DiagnosticRecord<'a> {
    iban: &'a str,
    rule_id: &'static str,
    violation: &'a Violation,
    message: String,
}

#[derive(Serialize)]
struct SummaryRecord {
    summary: Summary,
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes a single violation of `iban` in human-readable format.
///
/// Format: `[E] checksum  FR28 3000 3000 3093 3262 7391 239: checksum does not verify (MOD 97-10)`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic_human<W: Write>(
    writer: &mut W,
    iban: &str,
    violation: &Violation,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let rule_id = violation.rule_id();
    if config.colors {
        writeln!(
            writer,
            "{ANSI_RED}[E]{ANSI_RESET} {rule_id}  {iban}: {violation}"
        )
    } else {
        writeln!(writer, "[E] {rule_id}  {iban}: {violation}")
    }
}

/// Writes the summary line: `3 checked, 2 valid, 1 invalid`.
///
/// The `valid` count is green when colors are enabled. Suppressed in quiet
/// mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    summary: Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let Summary {
        checked,
        valid,
        invalid,
    } = summary;
    if config.colors {
        writeln!(
            writer,
            "{checked} checked, {ANSI_GREEN}{valid} valid{ANSI_RESET}, {invalid} invalid"
        )
    } else {
        writeln!(writer, "{checked} checked, {valid} valid, {invalid} invalid")
    }
}

/// Writes `<label> in <n>ms` in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON-mode formatting (NDJSON)
// ---------------------------------------------------------------------------

/// Writes a single violation of `iban` as an NDJSON line:
///
/// ```json
/// {"iban":"FR28...","rule_id":"checksum","violation":{"kind":"invalid_checksum"},"message":"..."}
/// ```
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_diagnostic_json<W: Write>(
    writer: &mut W,
    iban: &str,
    violation: &Violation,
) -> std::io::Result<()> {
    let record = DiagnosticRecord {
        iban,
        rule_id: violation.rule_id().code(),
        violation,
        message: violation.to_string(),
    };
    write_json_line(writer, &record)
}

/// Writes the summary as a final NDJSON line:
/// `{"summary":{"checked":3,"valid":2,"invalid":1}}`.
///
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    summary: Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    write_json_line(writer, &SummaryRecord { summary })
}

/// Serializes `value` as one compact JSON line.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_json_line<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes a single violation in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    iban: &str,
    violation: &Violation,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_diagnostic_human(writer, iban, violation, config),
        FormatMode::Json => write_diagnostic_json(writer, iban, violation),
    }
}

/// Writes the summary in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: Summary,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, summary, config),
        FormatMode::Json => write_summary_json(writer, summary, config),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
