//! Generated email drafts and CSV output.
//!
//! An [`EmailDraft`] is the per-row output record: subject line, preview
//! text, headline, and body. The output CSV has exactly those four columns,
//! in that order, one row per input row. A row whose generation failed is a
//! sentinel draft: all four fields carry the `ERROR` marker, with the
//! failure description embedded in the body so nothing is silently lost.

use crate::error::{MaildraftError, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Marker value placed in every field of a failed draft.
pub const ERROR_SENTINEL: &str = "ERROR";

/// One generated email, or the sentinel for a failed generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDraft {
    #[serde(rename = "Subject Line")]
    pub subject_line: String,
    #[serde(rename = "Preview Text")]
    pub preview_text: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Body")]
    pub body: String,
}

impl EmailDraft {
    /// Build the sentinel draft for a failed generation.
    ///
    /// All four fields carry the `ERROR` marker; the body additionally
    /// embeds the failure description.
    pub fn failure(description: &str) -> Self {
        Self {
            subject_line: ERROR_SENTINEL.to_string(),
            preview_text: ERROR_SENTINEL.to_string(),
            headline: ERROR_SENTINEL.to_string(),
            body: format!("{}: failed to generate email: {}", ERROR_SENTINEL, description),
        }
    }

    /// Whether this draft is a failure sentinel.
    pub fn is_failure(&self) -> bool {
        self.subject_line == ERROR_SENTINEL
            && self.preview_text == ERROR_SENTINEL
            && self.headline == ERROR_SENTINEL
    }
}

/// Write drafts as CSV to any writer, header row first.
pub fn write_drafts<W: Write>(writer: W, drafts: &[EmailDraft]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for draft in drafts {
        csv_writer
            .serialize(draft)
            .map_err(|e| MaildraftError::OutputError(format!("failed to write draft row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| MaildraftError::OutputError(format!("failed to flush draft output: {}", e)))
}

/// Write drafts as a CSV file.
pub fn write_drafts_to_file<P: AsRef<Path>>(path: P, drafts: &[EmailDraft]) -> Result<()> {
    let path = path.as_ref();

    let file = std::fs::File::create(path).map_err(|e| {
        MaildraftError::OutputError(format!(
            "failed to create output file '{}': {}",
            path.display(),
            e
        ))
    })?;

    write_drafts(file, drafts)
}
