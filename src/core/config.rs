//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("civiagora");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing sections and fields take defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Initial interface language: "auto", "fr", "de", "en"
    #[serde(default = "default_language")]
    pub language: String,
    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_language() -> String { "fr".to_string() }
fn default_log_level() -> String { "info".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}

/// Where management pages persist their entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-lifetime mock data
    #[default]
    Memory,
    Sqlite,
}

/// Storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// SQLite file; defaults to the platform data directory
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the SQLite database path
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;

        let app_dir = data_dir.join("civiagora");
        fs::create_dir_all(&app_dir)?;

        Ok(app_dir.join("data.db"))
    }
}

/// Tenant-level settings of the hosted platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Municipality name shown in page headers
    #[serde(default = "default_tenant_name")]
    pub tenant_name: String,
}

fn default_tenant_name() -> String { "CiviAgora".to_string() }

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            tenant_name: default_tenant_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.general.language, "fr");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.platform.tenant_name, "CiviAgora");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [general]
            language = "de"

            [storage]
            backend = "sqlite"
            database_path = "/tmp/civiagora-test.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.language, "de");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(
            config.storage.database_path().unwrap(),
            PathBuf::from("/tmp/civiagora-test.db")
        );
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let err = Config::from_toml("[storage]\nbackend = \"postgres\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_round_trip_through_toml() {
        let mut config = Config::default();
        config.platform.tenant_name = "Lausanne".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(parsed.platform.tenant_name, "Lausanne");
    }
}
