//! Maildraft: personalized coaching-email generation from a user roster.
//!
//! This is the main entry point for the `maildraft` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod completion;
pub mod config;
pub mod draft;
pub mod error;
pub mod exit_codes;
pub mod persona;
pub mod pipeline;
pub mod prompt;
pub mod reply;
pub mod roster;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
