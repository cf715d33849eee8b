//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits colored lines to stderr and plain text to stdout.
/// `Json` emits one JSON object per line (NDJSON) on both streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `iban` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate IBANs given as arguments or read one per line from a file.
    Validate {
        /// IBANs to validate. Quote an IBAN that contains spaces.
        #[arg(value_name = "IBAN")]
        ibans: Vec<String>,
        /// Read additional IBANs from FILE, one per line, or `-` for stdin.
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathOrStdin>,
    },

    /// Print IBANs in their grouped display form.
    Format {
        /// IBANs to format.
        #[arg(value_name = "IBAN", num_args = 1.., required = true)]
        ibans: Vec<String>,
        /// Refuse to format IBANs that fail validation.
        #[arg(long)]
        strict: bool,
    },

    /// List every supported country with its IBAN length and display mask.
    Countries,
}

/// Root CLI struct for the `iban` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "iban",
    version,
    about = "IBAN validator and formatter",
    long_about = "Validates International Bank Account Numbers against the\n\
                  SWIFT registry (country code, length, MOD 97-10 checksum)\n\
                  and prints them in their grouped display form."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress summary and timing output (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print timing lines and debug logging to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `IBAN_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    #[arg(
        long,
        global = true,
        env = "IBAN_MAX_FILE_SIZE",
        default_value = "1048576"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
