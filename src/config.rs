//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Package;

/// How computed metrics are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary sentence per workout
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Invalid("OUTPUT_FORMAT", s.to_string())),
        }
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::Invalid("LOG_FORMAT", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Packages to process, in order
    pub packages: Vec<Package>,
    /// Output layout for computed metrics
    pub output_format: OutputFormat,
    /// Log layout (logs always go to stderr)
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages: Package::defaults(),
            output_format: OutputFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let packages = match lookup("WORKOUT_PACKAGES") {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
                .map_err(|e| ConfigError::Packages(e.to_string()))?,
            _ => Package::defaults(),
        };

        let output_format = lookup("OUTPUT_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        let log_format = lookup("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            packages,
            output_format,
            log_format,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),

    #[error("Failed to parse WORKOUT_PACKAGES: {0}")]
    Packages(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).expect("Config should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.packages.len(), 3);
    }

    #[test]
    fn test_packages_from_json() {
        let config = Config::from_lookup(lookup_from(&[
            ("WORKOUT_PACKAGES", r#"[["WLK", [9000, 1, 75, 180]]]"#),
            ("OUTPUT_FORMAT", "JSON"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .expect("Config should load");

        assert_eq!(
            config.packages,
            vec![Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0])]
        );
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_malformed_packages_rejected() {
        let err = Config::from_lookup(lookup_from(&[("WORKOUT_PACKAGES", "not json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Packages(_)));
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("OUTPUT_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("OUTPUT_FORMAT", _)));
    }
}
