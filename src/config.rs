//! Redirector configuration.
//!
//! Defaults match the logout page contract: a `#iframeContainer` element
//! carrying `data-redirect-url`, an `access_token` cookie scoped to `/`, and
//! a `session` local-storage entry. Hosts can override any field via a JSON
//! config file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Names and keys the redirector operates on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedirectorConfig {
    /// Id of the container element scoping the iframe lookup.
    pub container_id: String,
    /// Attribute on the container holding the post-logout destination.
    pub redirect_url_attribute: String,
    /// Name of the client-side authentication cookie to expire.
    pub cookie_name: String,
    /// Path scope of the authentication cookie.
    pub cookie_path: String,
    /// Key of the local session record to remove.
    pub session_key: String,
}

impl Default for RedirectorConfig {
    fn default() -> Self {
        Self {
            container_id: "iframeContainer".to_string(),
            redirect_url_attribute: "data-redirect-url".to_string(),
            cookie_name: "access_token".to_string(),
            cookie_path: "/".to_string(),
            session_key: "session".to_string(),
        }
    }
}

impl RedirectorConfig {
    /// Parses a config from a JSON string. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are not valid config JSON.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Errors loading a redirector config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config contents were not valid JSON for this schema.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{ConfigError, RedirectorConfig};

    #[test]
    fn defaults_match_page_contract() {
        let config = RedirectorConfig::default();
        assert_eq!(config.container_id, "iframeContainer");
        assert_eq!(config.redirect_url_attribute, "data-redirect-url");
        assert_eq!(config.cookie_name, "access_token");
        assert_eq!(config.cookie_path, "/");
        assert_eq!(config.session_key, "session");
    }

    #[test]
    fn partial_json_keeps_defaults_for_absent_fields() {
        let config =
            RedirectorConfig::from_json_str(r#"{"cookie_name": "auth_token"}"#).unwrap();
        assert_eq!(config.cookie_name, "auth_token");
        assert_eq!(config.container_id, "iframeContainer");
        assert_eq!(config.session_key, "session");
    }

    #[test]
    fn empty_object_yields_defaults() {
        let config = RedirectorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RedirectorConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = RedirectorConfig::from_json_str(r#"{"cookie": "nope"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_json_file_reads_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("redirect.json");
        std::fs::write(&path, r#"{"container_id": "logoutFrames"}"#).unwrap();

        let config = RedirectorConfig::from_json_file(&path).unwrap();
        assert_eq!(config.container_id, "logoutFrames");
        assert_eq!(config.cookie_name, "access_token");
    }

    #[test]
    fn from_json_file_missing_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = RedirectorConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
