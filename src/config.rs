//! Application configuration file support.
//!
//! This module provides utilities for reading the server and data-source
//! configuration from TOML configuration files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no presence.toml found in standard locations")]
    NotFound,
}

/// Application configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Data-source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Presence CSV export path.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    /// Users XML export path; the directory is optional.
    #[serde(default)]
    pub users_xml_path: Option<PathBuf>,
    /// Cache refresh interval in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("runtime/data/sample_data.csv")
}

fn default_cache_ttl() -> u64 {
    600
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            users_xml_path: None,
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            data: DataSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `presence.toml` in the current directory, `config/`, and
    /// the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("presence.toml"),
            PathBuf::from("config/presence.toml"),
            PathBuf::from("../presence.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.data.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9090

[data]
csv_path = "/var/data/presence.csv"
users_xml_path = "/var/data/users.xml"
cache_ttl_secs = 120
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.data.csv_path, PathBuf::from("/var/data/presence.csv"));
        assert_eq!(
            config.data.users_xml_path,
            Some(PathBuf::from("/var/data/users.xml"))
        );
        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn test_defaults_applied_for_missing_sections() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data.users_xml_path, None);
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_partial_data_section() {
        let toml = r#"
[data]
csv_path = "presence.csv"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.csv_path, PathBuf::from("presence.csv"));
        assert_eq!(config.data.cache_ttl_secs, 600);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_file("/nonexistent/presence.toml"),
            Err(ConfigError::Read(_))
        ));
        let parsed: Result<AppConfig, _> = toml::from_str("server = 12");
        assert!(parsed.is_err());
    }
}
