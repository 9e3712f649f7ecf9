//! Configuration management for Bistro

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Public TheMealDB endpoint (v1, test key "1")
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search term passed to `search.php?s=`. Empty returns the default batch.
    #[serde(default)]
    pub search: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// Load configuration from the default location, using defaults when no file exists
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)
            .map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("BISTRO_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("bistro").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("bistro"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.search, "");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:9000/api"
search = "soup"
timeout_secs = 3

[ui]
tick_rate_ms = 250
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.search, "soup");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nsearch = \"chicken\"").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.search, "chicken");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nsearch = ").unwrap();

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::BistroError::Config(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/bistro/config.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::BistroError::Config(ConfigError::ReadError(_))
        ));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var("BISTRO_CONFIG", "/tmp/bistro-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("BISTRO_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/bistro-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        std::env::set_var("BISTRO_CONFIG", missing.to_str().unwrap());
        let config = Config::load_or_default();
        std::env::remove_var("BISTRO_CONFIG");

        assert_eq!(config.unwrap(), Config::default_config());
    }
}
