//! Parsing free-text model replies into structured draft fields.
//!
//! The completion service promises nothing about reply structure, so this
//! parser degrades gracefully instead of rejecting malformed output. It
//! walks the reply line by line, opening a new section whenever a line's
//! text before a colon matches one of the four known field names (Subject
//! Line, Preview Text, Headline, Body), case-insensitively, after stripping
//! markdown noise (heading markers, list markers, numbering, bold).
//!
//! Known-field-name matching is the single header-detection strategy; a
//! column-position heuristic was considered and rejected as too eager on
//! prose lines that happen to contain early colons.
//!
//! Missing fields default to empty, except the body, which falls back to
//! the entire raw reply so no text is ever silently dropped.

use crate::draft::EmailDraft;
use std::collections::HashMap;

/// The four recognized section names, as the prompt requests them.
const FIELD_NAMES: [&str; 4] = ["Subject Line", "Preview Text", "Headline", "Body"];

/// Parse a raw model reply into a draft.
///
/// Lines before the first recognized section are discarded. Lines inside a
/// section are trimmed and joined with newlines. When the same section
/// appears twice, the last occurrence wins. An empty reply yields all
/// fields empty (not an error); a reply with no recognized sections yields
/// empty subject/preview/headline and the full raw text as the body.
pub fn parse_reply(raw: &str) -> EmailDraft {
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current_section: Option<String> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in raw.lines() {
        if let Some((key, rest)) = split_section_header(line) {
            if let Some(section) = current_section.take() {
                sections.insert(section, buffer.join("\n").trim().to_string());
            }
            current_section = Some(key);
            buffer = vec![rest.trim().to_string()];
        } else if current_section.is_some() {
            buffer.push(line.trim().to_string());
        }
        // Lines before any section opens are discarded.
    }

    if let Some(section) = current_section {
        sections.insert(section, buffer.join("\n").trim().to_string());
    }

    EmailDraft {
        subject_line: sections.remove("subject line").unwrap_or_default(),
        preview_text: sections.remove("preview text").unwrap_or_default(),
        headline: sections.remove("headline").unwrap_or_default(),
        body: sections
            .remove("body")
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Check whether a line opens a known section.
///
/// Returns the lowercase canonical field name and the text after the colon.
fn split_section_header(line: &str) -> Option<(String, String)> {
    let (before, after) = line.split_once(':')?;
    let key = normalize_header(before);

    if FIELD_NAMES.iter().any(|name| name.eq_ignore_ascii_case(&key)) {
        Some((key.to_ascii_lowercase(), after.to_string()))
    } else {
        None
    }
}

/// Strip markdown noise from a candidate header: heading markers, list
/// markers, leading numbering ("1.", "2)"), and bold/emphasis markers.
fn normalize_header(text: &str) -> String {
    let text = text.trim();
    let text = text.trim_start_matches('#').trim_start();
    let text = strip_list_marker(text);
    text.trim_matches(|c| c == '*' || c == '_')
        .trim()
        .to_string()
}

/// Strip a leading list marker ("-", "*") or numbering ("1.", "2)").
fn strip_list_marker(text: &str) -> &str {
    let text = text
        .trim_start_matches(['-', '*'])
        .trim_start();

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &text[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return stripped.trim_start();
        }
    }

    text
}
