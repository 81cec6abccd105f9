//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (x-request-id assigned / kept)
//!     → server.rs (trace, CORS, timeout)
//!     → handlers.rs (GET /, GET /health)
//!     → response (x-request-id echoed)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use handlers::{HealthStatus, RootInfo};
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
