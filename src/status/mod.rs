//! Status client subsystem.
//!
//! # Data Flow
//! ```text
//! display.rs (mount)
//!     → probe.rs (one GET {base}/)
//!     → message + BackendState
//!     → Logger (one info or one error line)
//!
//! bench.rs: N × GET {base}{path} → BenchSummary
//! ```

pub mod bench;
pub mod display;
pub mod probe;

pub use display::{BackendState, StatusDisplay};
pub use probe::{ProbeError, StatusProbe};
