/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `iban` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The tool could not read the input or
///   was given nothing to work on.
/// - Exit code **1**: logical failure. The tool ran to completion but at
///   least one IBAN was rejected.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `iban` CLI can produce.
///
/// [`CliError::message`] returns the string `main` prints to stderr before
/// exiting with [`CliError::exit_code`].
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// An input file could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing to stdout or stderr.
    IoError {
        /// The file or stream involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// `validate` was run with no IBAN arguments and an empty input.
    NoInput,

    // --- Exit code 1: logical failures ---
    /// One or more IBANs failed validation.
    ///
    /// The diagnostics have already been printed.
    ValidationErrors {
        /// Number of rejected IBANs.
        invalid: usize,
        /// Number of IBANs checked.
        checked: usize,
    },

    /// One or more IBANs could not be formatted.
    FormatFailed {
        /// Number of IBANs that were not formatted.
        failed: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::NoInput => 2,

            Self::ValidationErrors { .. } | Self::FormatFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::NoInput => {
                "error: nothing to validate: pass IBANs as arguments or with --input".to_owned()
            }
            Self::ValidationErrors { invalid, checked } => {
                format!("error: {invalid} of {checked} IBANs failed validation")
            }
            Self::FormatFailed { failed } => {
                format!("error: {failed} IBANs could not be formatted")
            }
        }
    }

    /// Wraps a write failure on one of the standard streams.
    pub fn stream(name: &str, e: &std::io::Error) -> Self {
        Self::IoError {
            source: name.to_owned(),
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
