//! subpr: render a hackathon submission and publish it as a pull request.
//!
//! This is the main entry point for the `subpr` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and reports failures
//! with a recovery summary when one is available.

mod artifacts;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod fs;
mod git;
mod process;
mod publish;
mod template;
mod text;
mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(failure) => {
            eprintln!("[ERROR] {}", failure.error);
            if let Some(fallback) = failure.recovery() {
                fallback.print();
            }
            ExitCode::from(failure.error.exit_code() as u8)
        }
    }
}
