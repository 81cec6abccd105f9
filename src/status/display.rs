//! Backend connectivity display.
//!
//! Mounting performs one probe of `GET {base}/` and turns the outcome into a
//! message for the user plus log lines. Failures stop here; they are shown
//! and logged, never returned.

use std::fmt;
use std::sync::Arc;

use crate::log_context;
use crate::observability::Logger;
use crate::status::probe::StatusProbe;

pub const TITLE: &str = "Barkibu Claims Automation";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const CONNECTED_FALLBACK: &str = "Connected to backend";
pub const FAILURE_MESSAGE: &str = "Failed to connect to backend. Make sure the backend is running.";

const COMPONENT: &str = "App";

/// Backend reachability as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    Checking,
    Connected,
    Unreachable,
}

#[derive(Debug)]
pub struct StatusDisplay {
    logger: Arc<Logger>,
    probe: StatusProbe,
    message: String,
    backend: BackendState,
}

impl StatusDisplay {
    pub fn new(logger: Arc<Logger>, probe: StatusProbe) -> Self {
        Self {
            logger,
            probe,
            message: LOADING_MESSAGE.to_string(),
            backend: BackendState::Checking,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn backend(&self) -> BackendState {
        self.backend
    }

    /// Probe the backend once and update the displayed message.
    pub async fn mount(&mut self) {
        self.logger
            .info("App component mounted", &log_context!(COMPONENT, "Component lifecycle"));

        let ctx = log_context!(COMPONENT, "API call");
        match self.probe.fetch_root().await {
            Ok(body) => {
                self.logger.info("Backend connection successful", &ctx);
                self.message = body
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| CONNECTED_FALLBACK.to_string());
                self.backend = BackendState::Connected;
            }
            Err(e) => {
                self.logger.error("Failed to connect to backend", &ctx, Some(&e));
                self.message = FAILURE_MESSAGE.to_string();
                self.backend = BackendState::Unreachable;
            }
        }
    }
}

impl fmt::Display for StatusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match self.backend {
            BackendState::Checking => "⏳ Checking",
            BackendState::Connected => "✅ Connected",
            BackendState::Unreachable => "❌ Not connected",
        };

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        writeln!(f, "System Status")?;
        writeln!(f, "Frontend: ✅ Running")?;
        writeln!(f, "Backend: {backend}")?;
        writeln!(f)?;
        writeln!(f, "Check the console to see structured logs.")?;
        write!(f, "Log format: [YYYY-MM-DD HH:MM:SS,mmm][FileName][Component][Reason] Message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::{LogLevel, MemoryConsole};

    #[test]
    fn test_initial_render() {
        let logger = Arc::new(Logger::new(LogLevel::Info, Arc::new(MemoryConsole::new())));
        let display = StatusDisplay::new(logger, StatusProbe::new("http://localhost:8000"));
        assert_eq!(display.message(), LOADING_MESSAGE);
        assert_eq!(display.backend(), BackendState::Checking);

        let text = display.to_string();
        assert!(text.starts_with("Barkibu Claims Automation\nLoading...\n"));
        assert!(text.contains("Backend: ⏳ Checking"));
    }
}
