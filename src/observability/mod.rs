//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Status client:
//!     caller → logger.rs (level filter)
//!            → format.rs (line template)
//!            → console.rs (stdout / stderr)
//!
//! API service:
//!     tracing event → logging.rs (ClaimsFormat, same template) → stdout
//! ```
//!
//! Every line has the shape
//! `[YYYY-MM-DD HH:MM:SS,mmm][fileName][component][reason] message`.

pub mod console;
pub mod context;
pub mod format;
pub mod level;
pub mod logger;
pub mod logging;

pub use console::{stream_for, CapturedLine, ConsoleSink, MemoryConsole, StdConsole, Stream};
pub use context::LogContext;
pub use level::LogLevel;
pub use logger::Logger;
