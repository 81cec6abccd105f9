//! Configuration schema definitions.
//!
//! All sections default so that an empty file (or no file) is a valid
//! configuration.

use serde::{Deserialize, Serialize};

use crate::observability::LogLevel;

/// Root configuration shared by the API service and the status client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// API service settings.
    pub server: ServerConfig,

    /// Status client settings.
    pub status: StatusConfig,

    /// Log level settings.
    pub logging: LoggingConfig,
}

/// API service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,

    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            allowed_origins: vec!["http://localhost:5173".to_string()],
            request_timeout_secs: 30,
        }
    }
}

/// Status client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Base URL of the API service.
    pub api_url: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (debug, info, warn, error). Unknown values mean info.
    pub level: String,

    /// Force debug output regardless of `level`.
    pub enable_debug: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_debug: false,
        }
    }
}

impl LoggingConfig {
    /// Effective minimum level.
    pub fn resolved_level(&self) -> LogLevel {
        if self.enable_debug {
            LogLevel::Debug
        } else {
            LogLevel::from_config(Some(&self.level))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:8000");
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.status.api_url, "http://localhost:8000");
        assert_eq!(config.logging.resolved_level(), LogLevel::Info);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [status]
            api_url = "http://api.internal:9000"

            [logging]
            level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.status.api_url, "http://api.internal:9000");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.logging.resolved_level(), LogLevel::Warn);
    }

    #[test]
    fn test_enable_debug_wins() {
        let logging = LoggingConfig {
            level: "error".to_string(),
            enable_debug: true,
        };
        assert_eq!(logging.resolved_level(), LogLevel::Debug);
    }

    #[test]
    fn test_unknown_level_is_info() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
            enable_debug: false,
        };
        assert_eq!(logging.resolved_level(), LogLevel::Info);
    }
}
