//! dupescan - File Size Grouper and Duplicate Finder
//!
//! A command-line utility that walks a directory tree, groups files by
//! exact byte size, and optionally reports files within a size group that
//! share a content hash.

pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod scanner;

use anyhow::Result;

use crate::cli::Cli;
use crate::error::ExitCode;

/// Run the application with parsed command-line arguments.
///
/// Prompts are read from stdin and results written to stdout.
///
/// # Errors
///
/// Returns an error for unrecoverable failures: an unreadable file, an
/// invalid `--config` file, or stdin closing while a prompt waits.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run_cli(&cli, stdin.lock(), stdout.lock())
}
