//! Roster input: reading user records from delimited (CSV) data.
//!
//! All recognized columns are optional and looked up by header name, not
//! position; unrecognized columns are ignored. Recognized columns:
//!
//! - `Organization Name` - organization text (empty -> none)
//! - `Department` - department text (empty -> none)
//! - `Manager` - "yes"/"no", case-insensitive; anything but "yes" means IC
//! - `Start Date` - tried against a fixed list of formats; unparseable -> none
//!
//! A record is immutable once read; defaults for missing fields are applied
//! downstream from configuration, not here.

use crate::error::{MaildraftError, Result};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

/// Recognized roster column headers.
pub const COLUMN_ORGANIZATION: &str = "Organization Name";
pub const COLUMN_DEPARTMENT: &str = "Department";
pub const COLUMN_MANAGER: &str = "Manager";
pub const COLUMN_START_DATE: &str = "Start Date";

/// Date formats tried, in order, when parsing `Start Date`.
const START_DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// One row of roster input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Organization name, if the column is present and non-empty.
    pub organization: Option<String>,
    /// Department, if the column is present and non-empty.
    pub department: Option<String>,
    /// Whether the `Manager` column said "yes" (case-insensitive).
    pub is_manager: bool,
    /// Parsed start date; `None` when absent or unparseable.
    pub start_date: Option<NaiveDate>,
}

/// Read a roster CSV file into user records, preserving row order.
pub fn read_roster<P: AsRef<Path>>(path: P) -> Result<Vec<UserRecord>> {
    let path = path.as_ref();

    let file = std::fs::File::open(path).map_err(|e| {
        MaildraftError::InputError(format!(
            "failed to open roster '{}': {}",
            path.display(),
            e
        ))
    })?;

    from_reader(file).map_err(|e| {
        MaildraftError::InputError(format!("failed to read roster '{}': {}", path.display(), e))
    })
}

/// Read roster records from any reader producing CSV with a header row.
pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Vec<UserRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let organization_idx = column_index(&headers, COLUMN_ORGANIZATION);
    let department_idx = column_index(&headers, COLUMN_DEPARTMENT);
    let manager_idx = column_index(&headers, COLUMN_MANAGER);
    let start_date_idx = column_index(&headers, COLUMN_START_DATE);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;

        records.push(UserRecord {
            organization: field_text(&row, organization_idx),
            department: field_text(&row, department_idx),
            is_manager: field_text(&row, manager_idx)
                .is_some_and(|v| v.eq_ignore_ascii_case("yes")),
            start_date: field_text(&row, start_date_idx)
                .and_then(|v| parse_start_date(&v)),
        });
    }

    Ok(records)
}

/// Find a column by header name, tolerating surrounding whitespace.
fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Extract a trimmed, non-empty field value at the given column index.
fn field_text(row: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a start-date string against the supported formats.
///
/// Returns `None` when no format matches; the caller treats that as
/// "unknown" (tenure 0) rather than an error.
pub fn parse_start_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    START_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
