//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_server, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Load a TOML file without environment overrides or validation.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: file (or defaults), then process
/// environment. Values are not validated.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => AppConfig::default(),
    };
    apply_env(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// [`load_config`] followed by validation of the `server` section.
pub fn load_server_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config = load_config(path)?;
    validate_server(&config.server).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides read through `lookup`.
///
/// | Variable | Field |
/// |----------|-------|
/// | `API_URL` / `VITE_API_URL` | `status.api_url` |
/// | `LOG_LEVEL` / `VITE_LOG_LEVEL` | `logging.level` |
/// | `ENABLE_DEBUG_LOGS` | `logging.enable_debug` (`true` enables) |
/// | `BACKEND_HOST`, `BACKEND_PORT` | `server.bind_address` |
///
/// A non-numeric `BACKEND_PORT` is copied into `bind_address` as-is so that
/// server validation reports it.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let first = |names: &[&str]| names.iter().find_map(|name| lookup(name).filter(|v| !v.is_empty()));

    if let Some(url) = first(&["API_URL", "VITE_API_URL"]) {
        config.status.api_url = url;
    }

    if let Some(level) = first(&["LOG_LEVEL", "VITE_LOG_LEVEL"]) {
        config.logging.level = level;
    }

    if let Some(flag) = first(&["ENABLE_DEBUG_LOGS"]) {
        config.logging.enable_debug = flag.eq_ignore_ascii_case("true");
    }

    let host = first(&["BACKEND_HOST"]);
    let port = first(&["BACKEND_PORT"]);
    if host.is_some() || port.is_some() {
        let (default_host, default_port) = split_host_port(&config.server.bind_address);
        let host = host.unwrap_or(default_host);
        let port = port.unwrap_or_else(|| default_port.to_string());
        config.server.bind_address = format!("{host}:{port}");
    }
}

fn split_host_port(addr: &str) -> (String, u16) {
    match addr.rsplit_once(':') {
        Some((host, port)) => (host.to_string(), port.parse().unwrap_or(DEFAULT_PORT)),
        None => (addr.to_string(), DEFAULT_PORT),
    }
}

const DEFAULT_PORT: u16 = 8000;
