//! File-based presenter configuration.
//!
//! Hosts that prefer declaring the override table and message text in a
//! TOML file over wiring closures can load a [`PresenterConfig`] at startup:
//!
//! ```toml
//! [[classification.override]]
//! code = 441
//! category = "token"
//!
//! [messages]
//! connection = "No internet connection"
//! unknown_title = "An error occurred"
//!
//! [messages.session_expired]
//! title = "Your session has expired. Please log in again"
//! action = "OK"
//! ```
//!
//! Values can be overridden through the environment with the `MARQUEE`
//! prefix and `__` as the nesting separator.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::classify::{Classifier, ErrorCategory};

/// Errors that can occur when loading presenter configuration.
#[derive(Debug, Error)]
pub enum PresenterConfigError {
    /// The configuration file was not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] ConfigError),

    /// The configuration file path is invalid.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),
}

/// One host-declared classification override.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverrideRule {
    /// Status or platform error code.
    pub code: i64,
    /// Category the code maps to, ahead of the built-in table.
    pub category: ErrorCategory,
}

/// Classification section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationConfig {
    /// Override entries, in file order. Later entries win on duplicate codes.
    #[serde(rename = "override", default)]
    pub overrides: Vec<OverrideRule>,
}

/// Session-expired alert text. Required before Token-category failures can
/// be presented.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionExpiredMessage {
    /// Alert headline.
    pub title: String,
    /// Optional body text.
    #[serde(default)]
    pub message: Option<String>,
    /// Acknowledgement button label.
    #[serde(default = "default_acknowledge")]
    pub action: String,
}

/// Message text consumed by [`PresentationPolicy::from_messages`].
///
/// [`PresentationPolicy::from_messages`]: crate::policy::PresentationPolicy::from_messages
#[derive(Debug, Clone, Deserialize)]
pub struct Messages {
    /// Overlay banner text for connection failures.
    #[serde(default)]
    pub connection: Option<String>,
    /// Alert headline for unknown failures.
    #[serde(default)]
    pub unknown_title: Option<String>,
    /// Acknowledgement label used by the unknown-failure alert.
    #[serde(default = "default_acknowledge")]
    pub acknowledge: String,
    /// Session-expired alert text.
    #[serde(default)]
    pub session_expired: Option<SessionExpiredMessage>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            connection: None,
            unknown_title: None,
            acknowledge: default_acknowledge(),
            session_expired: None,
        }
    }
}

fn default_acknowledge() -> String {
    "OK".to_string()
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresenterConfig {
    /// Classification overrides.
    #[serde(default)]
    pub classification: ClassificationConfig,
    /// Presentation message text.
    #[serde(default)]
    pub messages: Messages,
}

impl PresenterConfig {
    /// Loads configuration from a TOML file, with `MARQUEE__`-prefixed
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or
    /// the path is not valid UTF-8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresenterConfigError> {
        let path = path.as_ref();

        let path_str = path
            .to_str()
            .ok_or_else(|| PresenterConfigError::InvalidPath(format!("{:?}", path)))?;

        if !path.exists() {
            return Err(PresenterConfigError::FileNotFound(path_str.to_string()));
        }

        let config = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(
                Environment::with_prefix("MARQUEE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let presenter_config: PresenterConfig = config.try_deserialize()?;
        Ok(presenter_config)
    }

    /// Builds the classifier declared by the `[classification]` section.
    pub fn classifier(&self) -> Classifier {
        let overrides: HashMap<i64, ErrorCategory> = self
            .classification
            .overrides
            .iter()
            .map(|rule| (rule.code, rule.category))
            .collect();
        Classifier::with_overrides(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::FailureSignal;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("marquee.toml");
        std::fs::write(&path, contents).expect("write config");
        (dir, path)
    }

    #[test]
    fn test_load_full_configuration() {
        let (_dir, path) = write_config(
            r#"
[[classification.override]]
code = 441
category = "token"

[[classification.override]]
code = 442
category = "token"

[[classification.override]]
code = 443
category = "token"

[messages]
connection = "No internet connection"
unknown_title = "An error occurred"
acknowledge = "Got it"

[messages.session_expired]
title = "Your session has expired. Please log in again"
action = "Log in"
"#,
        );

        let config = PresenterConfig::load(&path).expect("config should load");

        assert_eq!(config.classification.overrides.len(), 3);
        assert_eq!(
            config.messages.connection.as_deref(),
            Some("No internet connection")
        );
        assert_eq!(config.messages.acknowledge, "Got it");

        let session = config.messages.session_expired.as_ref().unwrap();
        assert_eq!(session.title, "Your session has expired. Please log in again");
        assert_eq!(session.action, "Log in");
        assert_eq!(session.message, None);

        let classifier = config.classifier();
        for code in [441, 442, 443] {
            assert_eq!(
                classifier.classify(FailureSignal::failed(code)),
                ErrorCategory::Token
            );
        }
    }

    #[test]
    fn test_load_empty_file_yields_defaults() {
        let (_dir, path) = write_config("");

        let config = PresenterConfig::load(&path).expect("empty config should load");
        assert!(config.classification.overrides.is_empty());
        assert!(config.messages.connection.is_none());
        assert!(config.messages.session_expired.is_none());
        assert_eq!(config.messages.acknowledge, "OK");
        assert_eq!(config.classifier().override_count(), 0);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = PresenterConfig::load("/nonexistent/marquee.toml");
        assert!(matches!(
            result,
            Err(PresenterConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_category_fails_to_parse() {
        let (_dir, path) = write_config(
            r#"
[[classification.override]]
code = 441
category = "banana"
"#,
        );

        let result = PresenterConfig::load(&path);
        assert!(matches!(result, Err(PresenterConfigError::Parse(_))));
    }

    #[test]
    fn test_later_duplicate_override_wins() {
        let (_dir, path) = write_config(
            r#"
[[classification.override]]
code = 418
category = "connection"

[[classification.override]]
code = 418
category = "token"
"#,
        );

        let config = PresenterConfig::load(&path).expect("config should load");
        let classifier = config.classifier();
        assert_eq!(
            classifier.classify(FailureSignal::failed(418)),
            ErrorCategory::Token
        );
    }
}
