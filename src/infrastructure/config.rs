use crate::domain::{
    CounterEngine, DEFAULT_DENOMINATIONS, DEFAULT_HISTORY_LIMIT, DenominationSet, DomainError,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config format - {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(#[from] DomainError),
}

/// Session settings read from a JSON file and overridden from the command line.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub denominations: Vec<u32>,
    #[serde(alias = "historyLimit")]
    pub history_limit: usize,
    #[serde(alias = "currencySymbol")]
    pub currency_symbol: String,
    pub dark: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            denominations: DEFAULT_DENOMINATIONS.to_vec(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            currency_symbol: "$".to_string(),
            dark: false,
        }
    }
}

/// Values given on the command line. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub denominations: Option<Vec<u32>>,
    pub history_limit: Option<usize>,
    pub currency_symbol: Option<String>,
    pub dark: bool,
}

impl CounterConfig {
    /// Resolves the session settings: defaults, then the file at `path` if
    /// any, then `overrides`.
    pub fn resolve(path: Option<&str>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path);
                Self::load(path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(denominations) = overrides.denominations {
            self.denominations = denominations;
        }
        if let Some(limit) = overrides.history_limit {
            self.history_limit = limit;
        }
        if let Some(symbol) = overrides.currency_symbol {
            self.currency_symbol = symbol;
        }
        if overrides.dark {
            self.dark = true;
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validates the settings and builds a fresh engine from them.
    pub fn build_engine(&self) -> Result<CounterEngine, ConfigError> {
        let denominations = DenominationSet::new(self.denominations.clone())?;
        Ok(CounterEngine::new(denominations, self.history_limit)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_builds_default_engine() {
        let engine = CounterConfig::default().build_engine().unwrap();
        assert_eq!(engine.denominations(), &DenominationSet::default());
        assert_eq!(engine.history_limit(), 50);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CounterConfig::from_json(r#"{ "historyLimit": 10 }"#).unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.denominations, vec![100, 50, 10, 5, 2]);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.dark);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "denominations": [20, 8, 2], "history_limit": 5, "currency_symbol": "S$", "dark": true }}"#
        )
        .unwrap();

        let config = CounterConfig::load(file.path()).unwrap();
        assert_eq!(config.denominations, vec![20, 8, 2]);
        assert_eq!(config.currency_symbol, "S$");
        assert!(config.dark);

        let engine = config.build_engine().unwrap();
        assert_eq!(engine.history_limit(), 5);
        assert_eq!(engine.denominations().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CounterConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "denominations": [20, 8], "history_limit": 5, "currency_symbol": "S$" }}"#
        )
        .unwrap();

        let overrides = ConfigOverrides {
            history_limit: Some(12),
            dark: true,
            ..ConfigOverrides::default()
        };
        let config = CounterConfig::resolve(file.path().to_str(), overrides).unwrap();

        assert_eq!(config.history_limit, 12);
        assert!(config.dark);
        assert_eq!(config.denominations, vec![20, 8]);
        assert_eq!(config.currency_symbol, "S$");
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let overrides = ConfigOverrides {
            denominations: Some(vec![10, 1]),
            ..ConfigOverrides::default()
        };
        let config = CounterConfig::resolve(None, overrides).unwrap();

        assert_eq!(config.denominations, vec![10, 1]);
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.dark);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = CounterConfig::from_json(r#"{ "dark": true, "history_limit": 7 }"#).unwrap();
        let before = config.clone();
        config.apply_overrides(ConfigOverrides::default());
        assert_eq!(config, before);
    }

    #[test]
    fn test_malformed_json() {
        let result = CounterConfig::from_json("{ denominations: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let duplicate = CounterConfig {
            denominations: vec![10, 10],
            ..CounterConfig::default()
        };
        assert!(matches!(
            duplicate.build_engine(),
            Err(ConfigError::Invalid(DomainError::DuplicateDenomination(10)))
        ));

        let no_history = CounterConfig {
            history_limit: 0,
            ..CounterConfig::default()
        };
        assert!(matches!(
            no_history.build_engine(),
            Err(ConfigError::Invalid(DomainError::ZeroHistoryLimit))
        ));
    }
}
