//! Logging initialization for the fp CLI.
//!
//! stdout is reserved for command payloads; every log line goes to
//! stderr. The filter comes from the `FP_LOG` environment variable when
//! set, otherwise from the `-v`/`-q` flags.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Map verbosity flags to a default filter directive.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging subsystem. Call once at startup.
pub fn init_logging(verbose: u8, quiet: bool, no_color: bool) {
    let filter = EnvFilter::try_from_env("FP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    let use_ansi = !no_color && std::io::stderr().is_terminal();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(false)
        .init();
}
