//! Runtime configuration.
//!
//! A config file is plain JSON; every field is optional:
//! ```json
//! { "history_window": 10, "convert_timeout_ms": 5000 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::engine::history::DEFAULT_WINDOW;

/// Default lifetime of conversion mode.
pub const DEFAULT_CONVERT_TIMEOUT_MS: u64 = 5_000;

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of history entries shown.
    pub history_window: usize,
    /// Milliseconds before conversion mode reverts on its own.
    pub convert_timeout_ms: u64,
}

impl Config {
    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json(&text)
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.convert_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "convert_timeout_ms",
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn convert_timeout(&self) -> Duration {
        Duration::from_millis(self.convert_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_window: DEFAULT_WINDOW,
            convert_timeout_ms: DEFAULT_CONVERT_TIMEOUT_MS,
        }
    }
}

/// Errors that can occur while loading a config.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.history_window, 10);
        assert_eq!(config.convert_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{ "history_window": 3 }"#).unwrap();
        assert_eq!(config.history_window, 3);
        assert_eq!(config.convert_timeout_ms, DEFAULT_CONVERT_TIMEOUT_MS);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_json(r#"{ "convert_timeout_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "convert_timeout_ms", .. }));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(Config::from_json("{"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/deskcalc.json").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
