//! Configuration loading for the API server.
//!
//! Settings come from an optional `config.toml` next to the binary, layered
//! with `CLIMATE_API__*` environment variables (e.g.
//! `CLIMATE_API__DATABASE__URL`). Every field has a default so the server
//! starts with no configuration at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration for the API server
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address and port to bind
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Data store settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database URL
    #[serde(default = "default_database_url")]
    pub url: String,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_database_url() -> String {
    "sqlite://climate.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("CLIMATE_API").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_field() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.database.url, "sqlite://climate.db");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"database": {"url": "sqlite://hawaii.db"}}"#).unwrap();
        assert_eq!(config.database.url, "sqlite://hawaii.db");
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
    }
}
