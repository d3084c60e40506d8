use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// What a search does with a listing whose data is malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// Fail the whole search.
    #[default]
    Abort,
    /// Leave the listing out and report it.
    Skip,
}

impl FromStr for InvalidRecordPolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(SearchError::Config(format!(
                "invalid-records must be 'abort' or 'skip', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for InvalidRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRecordPolicy::Abort => write!(f, "abort"),
            InvalidRecordPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Configuration for propsearch, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Listings file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listings_file: Option<PathBuf>,

    #[serde(default)]
    pub invalid_records: InvalidRecordPolicy,
}

impl SearchConfig {
    pub const KEYS: &'static [&'static str] = &["listings-file", "invalid-records"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Display value of a config key, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "listings-file" => Some(
                self.listings_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "invalid-records" => Some(self.invalid_records.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "listings-file" => {
                let value = value.trim();
                self.listings_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "invalid-records" => self.invalid_records = value.parse()?,
            _ => return Err(SearchError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.listings_file, None);
        assert_eq!(config.invalid_records, InvalidRecordPolicy::Abort);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("propsearch");

        let mut config = SearchConfig::default();
        config.set("listings-file", "/data/properties.json").unwrap();
        config.set("invalid-records", "Skip").unwrap();
        config.save(&nested).unwrap();

        let loaded = SearchConfig::load(&nested).unwrap();
        assert_eq!(loaded.listings_file, Some(PathBuf::from("/data/properties.json")));
        assert_eq!(loaded.invalid_records, InvalidRecordPolicy::Skip);
    }

    #[test]
    fn test_set_rejects_bad_policy() {
        let mut config = SearchConfig::default();
        let err = config.set("invalid-records", "ignore").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
        assert_eq!(config.invalid_records, InvalidRecordPolicy::Abort);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = SearchConfig::default();
        assert!(config.set("currency", "$").is_err());
        assert_eq!(config.get("currency"), None);
    }

    #[test]
    fn test_clearing_listings_file() {
        let mut config = SearchConfig::default();
        config.set("listings-file", "a.json").unwrap();
        config.set("listings-file", "").unwrap();
        assert_eq!(config.listings_file, None);
        assert_eq!(config.get("listings-file").as_deref(), Some(""));
    }

    #[test]
    fn test_policy_serializes_lowercase() {
        let config = SearchConfig {
            listings_file: None,
            invalid_records: InvalidRecordPolicy::Skip,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"invalid_records":"skip"}"#);

        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
