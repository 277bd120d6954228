//! Config struct definition and default implementation.

use crate::persona::Persona;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for email generation.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Prompt settings
    // =========================================================================
    /// Company name the copywriter persona writes for.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Placeholder organization used when the roster column is empty.
    #[serde(default = "default_organization")]
    pub default_organization: String,

    /// Placeholder department used when the roster column is empty.
    #[serde(default = "default_department")]
    pub default_department: String,

    /// Coaching-theme text per persona, interpolated into the prompt.
    ///
    /// Validation requires an entry for all six personas so the lookup
    /// during composition is total.
    #[serde(default = "default_coaching_themes")]
    pub coaching_themes: BTreeMap<Persona, String>,

    /// Optional extra context per department, added to the prompt when the
    /// user's department has an entry. Empty by default.
    #[serde(default)]
    pub department_context: BTreeMap<String, String>,

    // =========================================================================
    // Tenure settings
    // =========================================================================
    /// Reference date for tenure calculation.
    ///
    /// `None` means "today" at run time; tests and reproducible runs should
    /// pin a date here or pass `--reference-date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,

    // =========================================================================
    // Completion-service settings
    // =========================================================================
    /// Model identifier sent to the completion service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the completion service API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds. The service defines no timeout of
    /// its own, so the client always imposes this one.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            default_organization: default_organization(),
            default_department: default_department(),
            coaching_themes: default_coaching_themes(),
            department_context: BTreeMap::new(),
            reference_date: None,
            model: default_model(),
            api_base_url: default_api_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

pub(super) fn default_company_name() -> String {
    "Bravely".to_string()
}

pub(super) fn default_organization() -> String {
    "your organization".to_string()
}

pub(super) fn default_department() -> String {
    "their department".to_string()
}

pub(super) fn default_model() -> String {
    "gpt-4".to_string()
}

pub(super) fn default_api_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub(super) fn default_request_timeout_seconds() -> u64 {
    60
}

pub(super) fn default_coaching_themes() -> BTreeMap<Persona, String> {
    BTreeMap::from([
        (
            Persona::NewIc,
            "how to make a strong first impression, navigate early ambiguity, \
             or start building relationships with the right people"
                .to_string(),
        ),
        (
            Persona::EstablishedIc,
            "giving and receiving feedback, managing up with more impact, or \
             identifying growth opportunities aligned to your current goals"
                .to_string(),
        ),
        (
            Persona::VeteranIc,
            "long-term career direction, navigating change at your org, or \
             reclaiming motivation if things feel stagnant"
                .to_string(),
        ),
        (
            Persona::NewManager,
            "building trust quickly with your new team, setting clear \
             expectations, or aligning your leadership style to the company culture"
                .to_string(),
        ),
        (
            Persona::EstablishedManager,
            "navigating feedback conversations, developing your team's skills, \
             or balancing strategic and reactive work"
                .to_string(),
        ),
        (
            Persona::VeteranManager,
            "scaling your leadership, supporting your team's long-term growth, \
             or staying energized as responsibilities increase"
                .to_string(),
        ),
    ])
}
