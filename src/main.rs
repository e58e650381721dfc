//! quarto-marimo: text processing for the marimo Quarto engine.
//!
//! This is the main entry point for the `quarto-marimo` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler and maps
//! errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use quarto_marimo::{exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
