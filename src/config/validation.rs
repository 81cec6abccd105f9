//! Server configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem found is
//! reported, not just the first. Only the API service validates: the status
//! client lets a bad base URL reach the probe, where it shows up as a failed
//! backend call.

use axum::http::HeaderValue;
use thiserror::Error;
use url::{Host, Url};

use crate::config::schema::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.bind_address '{0}' is not a host:port pair")]
    BindAddress(String),

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("server.allowed_origins entry '{0}' is not a valid origin")]
    Origin(String),
}

pub fn validate_server(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_host_port(&config.bind_address) {
        errors.push(ValidationError::BindAddress(config.bind_address.clone()));
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    for origin in &config.allowed_origins {
        if Url::parse(origin).is_err() || HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::Origin(origin.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `host:port` where host is a domain, IPv4 address or bracketed IPv6
/// address and port fits in a `u16`.
fn is_host_port(addr: &str) -> bool {
    let Some((host, port)) = addr.rsplit_once(':') else {
        return false;
    };
    !host.is_empty() && port.parse::<u16>().is_ok() && Host::parse(host).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_server(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_bind_address_accepts_hostnames() {
        for addr in ["localhost:8000", "0.0.0.0:8000", "127.0.0.1:0", "[::1]:8000", "api.internal:9000"] {
            assert!(is_host_port(addr), "{addr} should be accepted");
        }
    }

    #[test]
    fn test_bind_address_rejects_malformed() {
        for addr in ["localhost", ":8000", "localhost:eighty", "localhost:70000", "bad host:8000"] {
            assert!(!is_host_port(addr), "{addr} should be rejected");
        }
    }

    #[test]
    fn test_reports_every_error() {
        let config = ServerConfig {
            bind_address: "localhost".to_string(),
            allowed_origins: vec!["not an origin".to_string()],
            request_timeout_secs: 0,
        };

        let errors = validate_server(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("localhost".to_string()),
                ValidationError::ZeroTimeout,
                ValidationError::Origin("not an origin".to_string()),
            ]
        );
    }
}
