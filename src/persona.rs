//! Persona classification from managerial status and tenure.
//!
//! A persona combines two facts about a user: whether they manage people and
//! how long they have been at the organization. Tenure is bucketed at fixed
//! thresholds (6 and 24 whole months), giving six personas that select the
//! coaching-theme text used in prompt composition.
//!
//! Classification is a pure total function: it is defined for every integer
//! tenure, including negative values (a start date after the reference date),
//! which fall into the "New" bucket like any other value below 6.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Tenure below this many months is the "New" bucket.
pub const ESTABLISHED_THRESHOLD_MONTHS: i32 = 6;

/// Tenure at or above this many months is the "Veteran" bucket.
pub const VETERAN_THRESHOLD_MONTHS: i32 = 24;

/// A user's persona: managerial status crossed with tenure bucket.
///
/// Serialized in snake_case so personas can be used as YAML map keys in the
/// coaching-theme table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Individual contributor, tenure < 6 months.
    NewIc,
    /// Individual contributor, tenure in [6, 24) months.
    EstablishedIc,
    /// Individual contributor, tenure >= 24 months.
    VeteranIc,
    /// Manager, tenure < 6 months.
    NewManager,
    /// Manager, tenure in [6, 24) months.
    EstablishedManager,
    /// Manager, tenure >= 24 months.
    VeteranManager,
}

impl Persona {
    /// All six personas, in declaration order.
    pub const ALL: [Persona; 6] = [
        Persona::NewIc,
        Persona::EstablishedIc,
        Persona::VeteranIc,
        Persona::NewManager,
        Persona::EstablishedManager,
        Persona::VeteranManager,
    ];

    /// Human-readable label used in prompts and preview output.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::NewIc => "New IC",
            Persona::EstablishedIc => "Established IC",
            Persona::VeteranIc => "Veteran IC",
            Persona::NewManager => "New Manager",
            Persona::EstablishedManager => "Established Manager",
            Persona::VeteranManager => "Veteran Manager",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a user into a persona.
///
/// Bucket boundaries are inclusive on the lower bound of the higher bucket:
/// tenure 6 is "Established", tenure 24 is "Veteran". Negative tenure is
/// treated like any other value below 6 (no floor validation).
pub fn classify(is_manager: bool, tenure_months: i32) -> Persona {
    match (is_manager, tenure_months) {
        (true, t) if t < ESTABLISHED_THRESHOLD_MONTHS => Persona::NewManager,
        (true, t) if t < VETERAN_THRESHOLD_MONTHS => Persona::EstablishedManager,
        (true, _) => Persona::VeteranManager,
        (false, t) if t < ESTABLISHED_THRESHOLD_MONTHS => Persona::NewIc,
        (false, t) if t < VETERAN_THRESHOLD_MONTHS => Persona::EstablishedIc,
        (false, _) => Persona::VeteranIc,
    }
}

/// Whole-month difference between a start date and the reference date.
///
/// Day-of-month is ignored: only the year and month components contribute,
/// so 2023-06-30 to 2025-06-01 is still 24 months. A missing start date
/// (absent or unparseable in the roster) counts as 0 months.
pub fn tenure_months(start_date: Option<NaiveDate>, reference: NaiveDate) -> i32 {
    match start_date {
        Some(start) => {
            (reference.year() - start.year()) * 12 + reference.month() as i32
                - start.month() as i32
        }
        None => 0,
    }
}
