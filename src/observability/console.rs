//! Console output streams.
//!
//! # Responsibilities
//! - Route a formatted line to the stream matching its severity
//! - Render an attached error next to the line without touching the line
//!
//! # Design Decisions
//! - debug/info go to stdout, warn/error go to stderr
//! - Write failures are swallowed; logging never fails its caller

use std::error::Error;
use std::io::{self, Write};
use std::sync::Mutex;

use super::level::LogLevel;

/// Destination for formatted log lines.
pub trait ConsoleSink: Send + Sync {
    /// Emit one line. `error` is the secondary argument of an error-level
    /// call and is kept separate from `line`.
    fn write(&self, level: LogLevel, line: &str, error: Option<&(dyn Error + 'static)>);
}

/// Standard stream a level is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub fn stream_for(level: LogLevel) -> Stream {
    match level {
        LogLevel::Debug | LogLevel::Info => Stream::Stdout,
        LogLevel::Warn | LogLevel::Error => Stream::Stderr,
    }
}

/// The process stdout/stderr pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl ConsoleSink for StdConsole {
    fn write(&self, level: LogLevel, line: &str, error: Option<&(dyn Error + 'static)>) {
        let _ = match stream_for(level) {
            Stream::Stdout => write_entry(&mut io::stdout().lock(), line, error),
            Stream::Stderr => write_entry(&mut io::stderr().lock(), line, error),
        };
    }
}

fn write_entry(out: &mut impl Write, line: &str, error: Option<&(dyn Error + 'static)>) -> io::Result<()> {
    writeln!(out, "{line}")?;
    if let Some(err) = error {
        writeln!(out, "{err}")?;
        let mut source = err.source();
        while let Some(cause) = source {
            writeln!(out, "Caused by: {cause}")?;
            source = cause.source();
        }
    }
    Ok(())
}

/// A line captured by [`MemoryConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub line: String,
    /// Display form of the secondary error argument, if one was passed.
    pub error: Option<String>,
    /// Address of the secondary error argument, for identity checks.
    pub error_addr: Option<usize>,
}

/// In-memory sink used by tests and embedders that inspect output.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn lines_at(&self, level: LogLevel) -> Vec<CapturedLine> {
        self.lines().into_iter().filter(|l| l.level == level).collect()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl ConsoleSink for MemoryConsole {
    fn write(&self, level: LogLevel, line: &str, error: Option<&(dyn Error + 'static)>) {
        let captured = CapturedLine {
            level,
            line: line.to_string(),
            error: error.map(|e| e.to_string()),
            error_addr: error.map(|e| e as *const dyn Error as *const () as usize),
        };
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failure")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Inner;

    #[test]
    fn test_stream_routing() {
        assert_eq!(stream_for(LogLevel::Debug), Stream::Stdout);
        assert_eq!(stream_for(LogLevel::Info), Stream::Stdout);
        assert_eq!(stream_for(LogLevel::Warn), Stream::Stderr);
        assert_eq!(stream_for(LogLevel::Error), Stream::Stderr);
    }

    #[test]
    fn test_entry_renders_error_after_line() {
        let mut buf = Vec::new();
        let err = Outer(Inner);
        write_entry(&mut buf, "[ts][f][c][r] boom", Some(&err)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "[ts][f][c][r] boom\nouter failure\nCaused by: connection refused\n");
    }

    #[test]
    fn test_entry_without_error_is_one_line() {
        let mut buf = Vec::new();
        write_entry(&mut buf, "line", None).unwrap();
        assert_eq!(buf, b"line\n");
    }

    #[test]
    fn test_memory_console_captures() {
        let console = MemoryConsole::new();
        console.write(LogLevel::Info, "a", None);
        console.write(LogLevel::Error, "b", Some(&Inner));
        assert_eq!(console.lines().len(), 2);
        let errors = console.lines_at(LogLevel::Error);
        assert_eq!(errors[0].error.as_deref(), Some("connection refused"));
        console.clear();
        assert!(console.lines().is_empty());
    }
}
