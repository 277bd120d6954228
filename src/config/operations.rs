//! Config loading, validation, and lookup operations.

use super::model::Config;
use crate::error::{MaildraftError, Result};
use crate::persona::Persona;
use chrono::NaiveDate;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MaildraftError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MaildraftError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `model` and `api_base_url` must be non-empty
    /// - `request_timeout_seconds` must be positive
    /// - `coaching_themes` must have an entry for all six personas
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(MaildraftError::ConfigError(
                "config validation failed: model must be non-empty".to_string(),
            ));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(MaildraftError::ConfigError(
                "config validation failed: api_base_url must be non-empty".to_string(),
            ));
        }

        if self.request_timeout_seconds == 0 {
            return Err(MaildraftError::ConfigError(
                "config validation failed: request_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        for persona in Persona::ALL {
            match self.coaching_themes.get(&persona) {
                Some(theme) if !theme.trim().is_empty() => {}
                _ => {
                    return Err(MaildraftError::ConfigError(format!(
                        "config validation failed: coaching_themes is missing a non-empty \
                         entry for persona '{}'",
                        persona
                    )));
                }
            }
        }

        Ok(())
    }

    /// Coaching-theme text for a persona.
    ///
    /// `validate()` guarantees an entry for every persona; an absent entry
    /// (config constructed without validation) yields the empty string
    /// rather than a panic.
    pub fn theme_for(&self, persona: Persona) -> &str {
        self.coaching_themes
            .get(&persona)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Extra prompt context for a department, when configured.
    pub fn context_for_department(&self, department: &str) -> Option<&str> {
        self.department_context
            .get(department)
            .map(String::as_str)
    }

    /// Resolve the tenure reference date.
    ///
    /// Priority: explicit override (CLI), then the config value, then today.
    pub fn resolve_reference_date(&self, override_date: Option<NaiveDate>) -> NaiveDate {
        override_date
            .or(self.reference_date)
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
