//! Centralized configuration management for chef-menu

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;

use crate::menu::SampleLoadMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Log directory does not exist: {0}")]
    MissingLogDir(PathBuf),

    #[error("Currency symbol must not be empty")]
    EmptyCurrency,

    #[error("Status history size must be at least 1")]
    ZeroHistory,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the TUI log file is written to
    pub log_dir: PathBuf,
    /// Name of the log file inside `log_dir`
    pub log_file_name: String,
    /// What "Load Sample Menu" does to the existing list
    pub sample_load_mode: SampleLoadMode,
    /// Image URL attached to custom items, if any
    pub default_image_url: Option<String>,
    /// Prefix shown before prices
    pub currency_symbol: String,
    /// Number of past status messages to keep
    pub status_history: usize,
    /// Prefix status bar messages with the time they were set
    pub status_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            log_file_name: "chef_menu.log".to_string(),
            sample_load_mode: SampleLoadMode::Replace,
            default_image_url: None,
            currency_symbol: "$".to_string(),
            status_history: 50,
            status_timestamps: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let log_dir = std::env::var("CHEF_MENU_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_file_name =
            std::env::var("CHEF_MENU_LOG_FILE").unwrap_or(defaults.log_file_name);

        let default_image_url = std::env::var("CHEF_MENU_IMAGE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Ok(Config {
            log_dir,
            log_file_name,
            sample_load_mode: parse_env_var("CHEF_MENU_SAMPLE_MODE")?
                .unwrap_or(defaults.sample_load_mode),
            default_image_url,
            currency_symbol: std::env::var("CHEF_MENU_CURRENCY")
                .unwrap_or(defaults.currency_symbol),
            status_history: parse_env_var("CHEF_MENU_STATUS_HISTORY")?
                .unwrap_or(defaults.status_history),
            status_timestamps: parse_env_var("CHEF_MENU_STATUS_TIMESTAMPS")?
                .unwrap_or(defaults.status_timestamps),
        })
    }

    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.log_dir.is_dir() {
            return Err(ConfigError::MissingLogDir(self.log_dir.clone()).into());
        }
        if self.currency_symbol.is_empty() {
            return Err(ConfigError::EmptyCurrency.into());
        }
        if self.status_history == 0 {
            return Err(ConfigError::ZeroHistory.into());
        }
        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var_name) {
        Ok(val) => val
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| {
                format!(
                    "Failed to parse environment variable {} = '{}'",
                    var_name, val
                )
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.log_path(), PathBuf::from("./chef_menu.log"));
        assert_eq!(config.sample_load_mode, SampleLoadMode::Replace);
        assert_eq!(config.currency_symbol, "$");
        assert!(config.default_image_url.is_none());
        assert!(!config.status_timestamps);
    }

    #[test]
    fn test_config_validation() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config {
            log_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        };
        config.validate().unwrap();

        config.currency_symbol.clear();
        assert!(config.validate().is_err());

        config.currency_symbol = "€".to_string();
        config.status_history = 0;
        assert!(config.validate().is_err());

        config.status_history = 10;
        config.log_dir = temp_dir.path().join("missing");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Log directory does not exist"));
    }

    #[test]
    fn test_parse_env_var() {
        std::env::set_var("CHEF_MENU_TEST_HISTORY", "12");
        let parsed: Option<usize> = parse_env_var("CHEF_MENU_TEST_HISTORY").unwrap();
        assert_eq!(parsed, Some(12));

        std::env::set_var("CHEF_MENU_TEST_MODE", "sideways");
        let err = parse_env_var::<SampleLoadMode>("CHEF_MENU_TEST_MODE").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse environment variable CHEF_MENU_TEST_MODE = 'sideways'"
        );
        assert!(format!("{:#}", err).contains("sideways"));

        std::env::set_var("CHEF_MENU_TEST_TIMESTAMPS", "true");
        let stamps: Option<bool> = parse_env_var("CHEF_MENU_TEST_TIMESTAMPS").unwrap();
        assert_eq!(stamps, Some(true));

        let unset: Option<usize> = parse_env_var("CHEF_MENU_TEST_UNSET").unwrap();
        assert_eq!(unset, None);
    }
}
