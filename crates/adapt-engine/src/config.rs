//! Engine Configuration

use std::path::Path;
use std::time::Duration;

use adapt_a11y::SpeechConfig;
use serde::Deserialize;

use crate::EngineError;

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Local storage key of the persisted settings
    pub storage_key: String,

    /// Screen reader speech parameters
    pub speech: SpeechConfig,

    /// Profile service
    pub api: ApiConfig,
}

/// Profile service options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root of the profile endpoints; `None` keeps profiles in memory
    pub base_url: Option<String>,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    pub bearer_token: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: "a11y-settings".to_string(),
            speech: SpeechConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            bearer_token: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EngineConfig {
    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::Config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.storage_key, "a11y-settings");
        assert_eq!(config.speech.locale, "ko-KR");
        assert_eq!(config.speech.max_chars, 100);
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_json_str(r#"{
            "api": {"base_url": "https://shop.example/api/accessibility"},
            "speech": {"rate": 1.5},
            "unknown": true
        }"#).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://shop.example/api/accessibility"));
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.speech.rate, 1.5);
        assert_eq!(config.speech.locale, "ko-KR");
        assert_eq!(config.storage_key, "a11y-settings");
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(EngineConfig::from_json_str("{"), Err(EngineError::Config(_))));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"api": {"timeout_secs": "soon"}}"#),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = EngineConfig::from_file("/nonexistent/adapt-engine.json");
        assert!(matches!(result, Err(EngineError::Storage(_))));
    }
}
