//! Leveled console logger.
//!
//! A `Logger` is constructed once and handed to whoever logs through it.
//! Messages below the configured minimum level are dropped before any
//! formatting happens.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use chrono::Local;

use super::console::{ConsoleSink, StdConsole};
use super::context::LogContext;
use super::format::format_line;
use super::level::LogLevel;

pub struct Logger {
    threshold: AtomicU8,
    sink: Arc<dyn ConsoleSink>,
}

impl Logger {
    pub fn new(level: LogLevel, sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            threshold: AtomicU8::new(level.severity()),
            sink,
        }
    }

    /// Logger writing to stdout/stderr.
    pub fn console(level: LogLevel) -> Self {
        Self::new(level, Arc::new(StdConsole))
    }

    /// Logger whose level comes from a raw configuration value.
    /// Missing or unrecognized values select `info`.
    pub fn from_config(level: Option<&str>, sink: Arc<dyn ConsoleSink>) -> Self {
        Self::new(LogLevel::from_config(level), sink)
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_severity(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level.severity(), Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.severity() >= self.threshold.load(Ordering::Relaxed)
    }

    pub fn debug(&self, message: &str, context: &LogContext<'_>) {
        self.emit(LogLevel::Debug, message, context, None);
    }

    pub fn info(&self, message: &str, context: &LogContext<'_>) {
        self.emit(LogLevel::Info, message, context, None);
    }

    pub fn warn(&self, message: &str, context: &LogContext<'_>) {
        self.emit(LogLevel::Warn, message, context, None);
    }

    /// Log at error level. `error` is handed to the sink alongside the line,
    /// not formatted into it.
    pub fn error(&self, message: &str, context: &LogContext<'_>, error: Option<&(dyn Error + 'static)>) {
        self.emit(LogLevel::Error, message, context, error);
    }

    fn emit(&self, level: LogLevel, message: &str, context: &LogContext<'_>, error: Option<&(dyn Error + 'static)>) {
        if !self.is_enabled(level) {
            return;
        }
        let line = format_line(&Local::now().naive_local(), context, message);
        self.sink.write(level, &line, error);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level()).finish_non_exhaustive()
    }
}
