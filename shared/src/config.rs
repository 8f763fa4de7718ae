//! Configuration management for the skill Lambda.

use std::env;

use crate::{Error, Result};

/// Skill id registered for the Wall of Shame skill.
pub const DEFAULT_APPLICATION_ID: &str = "amzn1.ask.skill.b5d35f54-1ef3-4d0a-8f2a-63c21ac5d7a2";

/// Maximum accepted drift between the request timestamp and now.
pub const DEFAULT_TIMESTAMP_TOLERANCE_SECS: u64 = 150;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application ids allowed to invoke the skill. Empty disables the check.
    pub application_ids: Vec<String>,
    /// Request timestamp tolerance in seconds. Zero disables the check.
    pub timestamp_tolerance_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_ids: vec![DEFAULT_APPLICATION_ID.to_string()],
            timestamp_tolerance_secs: DEFAULT_TIMESTAMP_TOLERANCE_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("SKILL_APPLICATION_IDS").ok(),
            env::var("TIMESTAMP_TOLERANCE_SECS").ok(),
        )
    }

    fn from_vars(application_ids: Option<String>, tolerance: Option<String>) -> Result<Self> {
        let application_ids = match application_ids {
            Some(ids) => parse_id_list(&ids),
            None => vec![DEFAULT_APPLICATION_ID.to_string()],
        };

        let timestamp_tolerance_secs = match tolerance {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::Config(format!("TIMESTAMP_TOLERANCE_SECS must be an integer: {}", e))
            })?,
            None => DEFAULT_TIMESTAMP_TOLERANCE_SECS,
        };

        Ok(Self {
            application_ids,
            timestamp_tolerance_secs,
        })
    }
}

fn parse_id_list(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_application_ids() {
        let config = Config::from_vars(Some("skill-a, skill-b,,".to_string()), None).unwrap();
        assert_eq!(config.application_ids, vec!["skill-a", "skill-b"]);
    }

    #[test]
    fn test_empty_id_list_disables_allow_list() {
        let config = Config::from_vars(Some("".to_string()), Some("0".to_string())).unwrap();
        assert!(config.application_ids.is_empty());
        assert_eq!(config.timestamp_tolerance_secs, 0);
    }

    #[test]
    fn test_invalid_tolerance_is_config_error() {
        let err = Config::from_vars(None, Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
