//! Per-call log context.

use std::path::Path;

/// Label used when a call does not name its source file.
pub const UNKNOWN_FILE: &str = "Unknown";

/// Origin information attached to every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogContext<'a> {
    pub component: &'a str,
    pub reason: &'a str,
    pub file_name: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    pub fn new(component: &'a str, reason: &'a str) -> Self {
        Self {
            component,
            reason,
            file_name: None,
        }
    }

    pub fn with_file(mut self, file_name: &'a str) -> Self {
        self.file_name = Some(file_name);
        self
    }

    /// File segment as printed; empty names count as missing.
    pub fn file_label(&self) -> &'a str {
        match self.file_name {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_FILE,
        }
    }
}

/// Basename of a source path, e.g. `src/status/display.rs` -> `display.rs`.
pub fn source_file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Build a [`LogContext`] whose file segment is the calling source file.
///
/// ```
/// use claims_status::log_context;
///
/// let ctx = log_context!("App", "API call");
/// assert_eq!(ctx.component, "App");
/// assert!(ctx.file_name.is_some());
/// ```
#[macro_export]
macro_rules! log_context {
    ($component:expr, $reason:expr) => {
        $crate::observability::LogContext::new($component, $reason)
            .with_file($crate::observability::context::source_file_name(file!()))
    };
}
