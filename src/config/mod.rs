//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides)
//!     → validation.rs (server section only, API service)
//!     → AppConfig (immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so no file is needed
//! - Environment overrides the file; CLI flags override both
//! - An unknown log level is not an error; it resolves to info

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env, load_config, load_server_config, ConfigError};
pub use schema::{AppConfig, LoggingConfig, ServerConfig, StatusConfig};
pub use validation::{validate_server, ValidationError};
