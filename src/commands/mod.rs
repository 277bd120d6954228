//! Command implementations for maildraft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus small helpers shared across commands.

mod generate;
mod preview;
mod prompt;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{MaildraftError, Result};
use crate::roster::{self, UserRecord};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Preview(args) => preview::cmd_preview(args),
        Command::Prompt(args) => prompt::cmd_prompt(args),
    }
}

/// Load config from an explicit path, or use defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Read a roster and reject one with no data rows before any processing.
fn read_nonempty_roster(path: &Path) -> Result<Vec<UserRecord>> {
    let records = roster::read_roster(path)?;

    if records.is_empty() {
        return Err(MaildraftError::InputError(format!(
            "roster '{}' has no data rows",
            path.display()
        )));
    }

    Ok(records)
}

/// Validate the topic argument: must be non-blank.
fn require_topic(topic: &str) -> Result<&str> {
    let topic = topic.trim();

    if topic.is_empty() {
        return Err(MaildraftError::InputError(
            "topic must not be empty\nFix: pass a topic with --topic, e.g. --topic \"career growth\"".to_string(),
        ));
    }

    Ok(topic)
}
