//! Tracing subscriber setup.
//!
//! Events go to stderr so stdout stays clean for command output. The filter
//! comes from `IBAN_LOG` when set (standard `EnvFilter` directives such as
//! `iban_core=trace`), otherwise from the `--verbose` flag.
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "IBAN_LOG";

/// Filter applied when `IBAN_LOG` is unset or unparsable.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber. Call once, at startup.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
