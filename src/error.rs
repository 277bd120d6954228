//! Error types for the maildraft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! These errors cover failures detected before or after the generation loop
//! (bad input, bad configuration, unwritable output). Per-record completion
//! failures inside the loop are deliberately *not* represented here: they are
//! carried as [`crate::completion::CompletionError`] values and converted into
//! sentinel drafts so that a single bad row never aborts the batch.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for maildraft operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum MaildraftError {
    /// Bad arguments or unusable input data (missing topic, unreadable or
    /// empty roster).
    #[error("{0}")]
    InputError(String),

    /// Missing or invalid configuration, including the completion-service
    /// credential.
    #[error("{0}")]
    ConfigError(String),

    /// Generated drafts could not be written out.
    #[error("{0}")]
    OutputError(String),
}

impl MaildraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MaildraftError::InputError(_) => exit_codes::USER_ERROR,
            MaildraftError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            MaildraftError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for maildraft operations.
pub type Result<T> = std::result::Result<T, MaildraftError>;
