//! Service configuration - TOML file plus environment overrides
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. TOML file (`~/.datacollect/config.toml` unless a path is given)
//! 3. Environment: `DATACOLLECT_BIND`, `DATACOLLECT_DB_PATH`,
//!    `DATACOLLECT_CORS_PERMISSIVE`, `DATACOLLECT_MAX_CONNECTIONS`
//!
//! Command-line flags are applied on top by the CLI.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;

const ENV_BIND: &str = "DATACOLLECT_BIND";
const ENV_DB_PATH: &str = "DATACOLLECT_DB_PATH";
const ENV_CORS_PERMISSIVE: &str = "DATACOLLECT_CORS_PERMISSIVE";
const ENV_MAX_CONNECTIONS: &str = "DATACOLLECT_MAX_CONNECTIONS";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Full service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatacollectConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

/// `[server]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind: SocketAddr,
    /// Allow any CORS origin (default: localhost only)
    pub cors_permissive: bool,
}

/// `[database]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// SQLite database file
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_permissive: false,
        }
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: DatacollectConfig::home_dir().join("data_collection.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatacollectConfig {
    /// Base directory: ~/.datacollect
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".datacollect")
    }

    /// Default config file path: ~/.datacollect/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Load config with environment overrides.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// production, a map in tests).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BIND) {
            self.server.bind = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_BIND,
                value,
            })?;
        }

        if let Some(value) = lookup(ENV_DB_PATH) {
            self.database.path = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_CORS_PERMISSIVE) {
            self.server.cors_permissive = match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_CORS_PERMISSIVE,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(ENV_MAX_CONNECTIONS) {
            self.database.max_connections = value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: ENV_MAX_CONNECTIONS,
                    value,
                })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = DatacollectConfig::default();
        assert_eq!(config.server.bind.port(), 8000);
        assert!(!config.server.cors_permissive);
        assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.database.path.ends_with(".datacollect/data_collection.db"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[database]\npath = \"/srv/collect.db\"\n").unwrap();

        let config = DatacollectConfig::from_file(&path).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/srv/collect.db"));
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = DatacollectConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbind = 12\n").unwrap();

        let err = DatacollectConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = DatacollectConfig::default();
        config
            .apply_env(env(&[
                ("DATACOLLECT_BIND", "0.0.0.0:9000"),
                ("DATACOLLECT_DB_PATH", "/tmp/x.db"),
                ("DATACOLLECT_CORS_PERMISSIVE", "true"),
                ("DATACOLLECT_MAX_CONNECTIONS", "8"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.database.path, PathBuf::from("/tmp/x.db"));
        assert!(config.server.cors_permissive);
        assert_eq!(config.database.max_connections, 8);
    }

    #[test]
    fn invalid_env_values_name_the_key() {
        let mut config = DatacollectConfig::default();
        let err = config
            .apply_env(env(&[("DATACOLLECT_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for DATACOLLECT_MAX_CONNECTIONS: '0'"
        );

        let err = config
            .apply_env(env(&[("DATACOLLECT_BIND", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DATACOLLECT_BIND", .. }));
    }
}
