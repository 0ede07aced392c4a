//! Application configuration management
//!
//! Handles loading and saving user settings:
//! - Default product data file
//! - TUI tick rate

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{CardListError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Product data used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Interval between TUI ticks in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "cardlist", "cardlist")
            .ok_or_else(|| CardListError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Set the tick rate, rejecting zero
    pub fn set_tick_rate(&mut self, value: &str) -> Result<()> {
        let ms: u64 = value
            .parse()
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| {
                CardListError::InvalidInput(format!(
                    "Invalid tick rate '{}'. Expected a positive number of milliseconds.",
                    value
                ))
            })?;
        self.tick_rate_ms = ms;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            data_file: Some(PathBuf::from("/tmp/products.json")),
            tick_rate_ms: 100,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = \"p.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("p.json")));
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_set_tick_rate() {
        let mut config = Config::default();
        config.set_tick_rate("120").unwrap();
        assert_eq!(config.tick_rate_ms, 120);
        assert!(config.set_tick_rate("0").is_err());
        assert!(config.set_tick_rate("fast").is_err());
        assert_eq!(config.tick_rate_ms, 120);
    }
}
