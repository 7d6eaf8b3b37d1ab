//! User configuration.
//!
//! Settings are read from a flat JSON object of dotted keys, as editors store them:
//!
//! ```json
//! { "changeCase.includeDotInCurrentWord": true }
//! ```
//!
//! Unrelated keys are ignored and missing keys fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::word::WordClass;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings are not a valid JSON object.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options read once per command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Treat `.` as part of the word around a caret.
    #[serde(rename = "changeCase.includeDotInCurrentWord", default)]
    pub include_dot_in_current_word: bool,
}

impl CaseConfig {
    /// Parse a settings object.
    pub fn from_settings_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_settings_json(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded settings");
        Ok(config)
    }

    /// The word class selected by these settings.
    pub fn word_class(&self) -> WordClass {
        WordClass::from_include_dot(self.include_dot_in_current_word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_key_missing() {
        let config = CaseConfig::from_settings_json(r#"{"editor.tabSize": 4}"#).unwrap();
        assert_eq!(config, CaseConfig::default());
        assert_eq!(config.word_class(), WordClass::WithoutDot);
    }

    #[test]
    fn test_reads_include_dot() {
        let config =
            CaseConfig::from_settings_json(r#"{"changeCase.includeDotInCurrentWord": true}"#)
                .unwrap();
        assert!(config.include_dot_in_current_word);
        assert_eq!(config.word_class(), WordClass::WithDot);
    }

    #[test]
    fn test_rejects_wrong_type() {
        let err =
            CaseConfig::from_settings_json(r#"{"changeCase.includeDotInCurrentWord": "yes"}"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CaseConfig::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(config, CaseConfig::default());
    }

    #[test]
    fn test_load_reads_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "editor.fontSize": 14, "changeCase.includeDotInCurrentWord": true }"#,
        )
        .unwrap();

        let config = CaseConfig::load(&path).unwrap();
        assert!(config.include_dot_in_current_word);
    }

    #[test]
    fn test_load_reports_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ // comments are not JSON
}").unwrap();

        let err = CaseConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
