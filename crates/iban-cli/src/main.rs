mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser as _;

use crate::cli::{Cli, Command};
pub(crate) use crate::cli::{OutputFormat, PathOrStdin};
use crate::error::CliError;
use crate::format::{FormatMode, FormatterConfig};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to its subcommand.
fn run(cli: &Cli) -> Result<(), CliError> {
    let mode = FormatMode::from(cli.format);
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    match &cli.command {
        Command::Validate { ibans, input } => {
            cmd::validate::run(ibans, input.as_ref(), cli.max_file_size, mode, &config)
        }
        Command::Format { ibans, strict } => cmd::format::run(ibans, *strict, mode, &config),
        Command::Countries => cmd::countries::run(mode),
    }
}
