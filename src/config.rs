use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::Duration;

const APP_NAME: &str = "marquee";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured API base URL
const API_URL_ENV: &str = "MARQUEE_API_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog API, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-attempt request deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Page requested when a listing call does not name one
    #[serde(default = "default_page")]
    pub default_page: u32,
    /// Page size requested when a listing call does not name one
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    25
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            default_page: default_page(),
            default_limit: default_limit(),
        }
    }
}

impl Config {
    /// Request deadline as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: RwLock<Config>,
}

impl ConfigManager {
    /// Creates a new configuration manager
    ///
    /// Reads the config file if present. The MARQUEE_API_URL environment
    /// variable, when set and non-empty, overrides the configured base URL.
    pub fn new() -> Result<Self> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        let config_file = config_dir.join(CONFIG_FILE);

        let mut config = if config_file.exists() {
            let data =
                std::fs::read_to_string(&config_file).context("Failed to read config file")?;
            serde_json::from_str(&data).unwrap_or_default()
        } else {
            Config::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        Ok(Self {
            config: RwLock::new(config),
        })
    }

    /// Gets a copy of the current configuration
    pub fn get(&self) -> Config {
        self.config.read().unwrap().clone()
    }

    /// Updates and saves the configuration
    pub fn save(&self, config: Config) -> Result<()> {
        let config_dir = Self::config_dir()?;
        let config_file = config_dir.join(CONFIG_FILE);

        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        std::fs::write(&config_file, json).context("Failed to write config file")?;

        // Update in-memory config
        *self.config.write().unwrap() = config;

        Ok(())
    }

    /// Returns the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Config default values tests ===

    #[test]
    fn default_timeout_is_10s() {
        let config = Config::default();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn default_pagination() {
        let config = Config::default();
        assert_eq!(config.default_page, 1);
        assert_eq!(config.default_limit, 25);
    }

    // === deserialization tests ===

    #[test]
    fn deserialize_empty_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.default_page, 1);
        assert_eq!(config.default_limit, 25);
    }

    #[test]
    fn deserialize_partial_uses_defaults_for_missing() {
        let json = r#"{"base_url": "https://movies.example.com"}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.base_url, "https://movies.example.com"); // Overridden
        assert_eq!(config.timeout_ms, 10_000); // Default
        assert_eq!(config.default_limit, 25); // Default
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let json = r#"{"timeout_ms": 5000, "unknown_field": "ignored"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn serialize_roundtrip() {
        let original = Config {
            base_url: "https://movies.example.com".to_string(),
            timeout_ms: 2_500,
            default_page: 1,
            default_limit: 50,
        };

        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.base_url, original.base_url);
        assert_eq!(deserialized.timeout_ms, original.timeout_ms);
        assert_eq!(deserialized.default_page, original.default_page);
        assert_eq!(deserialized.default_limit, original.default_limit);
    }
}
