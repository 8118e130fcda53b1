//! Datafeed configuration built from a [`ConfigPort`].

use crate::domain::error::DatafeedError;
use crate::domain::interval_map::IntervalTable;
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

/// Explicit configuration handed to the datafeed at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatafeedConfig {
    pub username: String,
    pub password: String,
    pub intervals: IntervalTable,
    pub table_dir: Option<PathBuf>,
}

impl DatafeedConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, DatafeedError> {
        let username = config
            .get_string("datafeed", "username")
            .unwrap_or_default();
        let password = config
            .get_string("datafeed", "password")
            .unwrap_or_default();

        if !password.is_empty() && username.trim().is_empty() {
            return Err(DatafeedError::ConfigInvalid {
                section: "datafeed".into(),
                key: "username".into(),
                reason: "password is set but username is empty".into(),
            });
        }

        let intervals = if config.get_bool("datafeed", "monthly", false) {
            IntervalTable::with_monthly()
        } else {
            IntervalTable::standard()
        };

        let table_dir = config
            .get_string("provider", "table_dir")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            username,
            password,
            intervals,
            table_dir,
        })
    }

    /// The configured price table directory, required by file-backed providers.
    pub fn require_table_dir(&self) -> Result<&PathBuf, DatafeedError> {
        self.table_dir
            .as_ref()
            .ok_or_else(|| DatafeedError::ConfigMissing {
                section: "provider".into(),
                key: "table_dir".into(),
            })
    }

    /// Check the configuration is usable, describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.table_dir {
            if !dir.is_dir() {
                return Err(format!("table_dir {} is not a directory", dir.display()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constant::Interval;
    use std::collections::HashMap;

    struct MapConfig(HashMap<(String, String), String>);

    impl MapConfig {
        fn new(pairs: &[(&str, &str, &str)]) -> Self {
            Self(
                pairs
                    .iter()
                    .map(|(s, k, v)| ((s.to_string(), k.to_string()), v.to_string()))
                    .collect(),
            )
        }
    }

    impl ConfigPort for MapConfig {
        fn get_string(&self, section: &str, key: &str) -> Option<String> {
            self.0.get(&(section.to_string(), key.to_string())).cloned()
        }

        fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
            self.get_string(section, key)
                .map(|v| v == "true")
                .unwrap_or(default)
        }
    }

    #[test]
    fn defaults_when_empty() {
        let config = DatafeedConfig::from_config(&MapConfig::new(&[])).unwrap();
        assert_eq!(config.username, "");
        assert_eq!(config.intervals, IntervalTable::standard());
        assert!(config.table_dir.is_none());
        assert!(config.require_table_dir().is_err());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn monthly_switch_enables_monthly() {
        let config =
            DatafeedConfig::from_config(&MapConfig::new(&[("datafeed", "monthly", "true")]))
                .unwrap();
        assert_eq!(config.intervals.get(Interval::Monthly), Some("monthly"));
    }

    #[test]
    fn password_without_username_is_invalid() {
        let err =
            DatafeedConfig::from_config(&MapConfig::new(&[("datafeed", "password", "secret")]))
                .unwrap_err();
        assert!(matches!(err, DatafeedError::ConfigInvalid { key, .. } if key == "username"));
    }

    #[test]
    fn blank_table_dir_is_unset() {
        let config =
            DatafeedConfig::from_config(&MapConfig::new(&[("provider", "table_dir", "  ")]))
                .unwrap();
        assert!(config.table_dir.is_none());
    }

    #[test]
    fn validate_rejects_missing_directory() {
        let config = DatafeedConfig {
            table_dir: Some(PathBuf::from("/nonexistent/barfeed/tables")),
            ..Default::default()
        };
        let reason = config.validate().unwrap_err();
        assert!(reason.contains("not a directory"));
    }
}
