//! Claims status: leveled console logging, a backend status client, and the
//! claims API it talks to.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod status;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::{LogContext, LogLevel, Logger};
pub use status::{StatusDisplay, StatusProbe};
