//! End-to-end tests for the status display against mock backends.

use std::sync::Arc;

use claims_status::observability::{LogLevel, Logger, MemoryConsole};
use claims_status::status::display::{CONNECTED_FALLBACK, FAILURE_MESSAGE};
use claims_status::status::{BackendState, StatusDisplay, StatusProbe};

mod common;

fn display_for(base_url: &str, level: LogLevel) -> (StatusDisplay, Arc<MemoryConsole>) {
    let console = Arc::new(MemoryConsole::new());
    let logger = Arc::new(Logger::new(level, console.clone()));
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    (StatusDisplay::new(logger, StatusProbe::with_client(client, base_url)), console)
}

#[tokio::test]
async fn test_success_shows_backend_message() {
    let addr = common::start_mock_backend(200, r#"{"message":"ok"}"#).await;
    let (mut display, console) = display_for(&format!("http://{addr}"), LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), "ok");
    assert_eq!(display.backend(), BackendState::Connected);

    let api_lines: Vec<_> = console.lines().into_iter().filter(|l| l.line.contains("[App][API call]")).collect();
    assert_eq!(api_lines.len(), 1);
    assert_eq!(api_lines[0].level, LogLevel::Info);
    assert!(api_lines[0].line.ends_with("[display.rs][App][API call] Backend connection successful"));
    assert!(console.lines_at(LogLevel::Error).is_empty());

    let mounted = &console.lines()[0];
    assert!(mounted.line.ends_with("[App][Component lifecycle] App component mounted"));
    assert!(display.to_string().contains("Backend: ✅ Connected"));
}

#[tokio::test]
async fn test_missing_message_uses_fallback() {
    let addr = common::start_mock_backend(200, r#"{"version":"0.1.0"}"#).await;
    let (mut display, _console) = display_for(&format!("http://{addr}/"), LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), CONNECTED_FALLBACK);
    assert_eq!(display.backend(), BackendState::Connected);
}

#[tokio::test]
async fn test_unreachable_backend_shows_failure() {
    let addr = common::closed_addr();
    let (mut display, console) = display_for(&format!("http://{addr}"), LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), FAILURE_MESSAGE);
    assert_eq!(display.backend(), BackendState::Unreachable);

    let errors = console.lines_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].line.ends_with("[App][API call] Failed to connect to backend"));
    let carried = errors[0].error.as_deref().expect("error passed as secondary argument");
    assert!(carried.contains(&addr.to_string()));
    assert!(!errors[0].line.contains(carried));
    assert!(display.to_string().contains("Backend: ❌ Not connected"));
}

#[tokio::test]
async fn test_base_url_without_scheme_is_a_failure() {
    let (mut display, console) = display_for("localhost:8000", LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), FAILURE_MESSAGE);
    assert_eq!(display.backend(), BackendState::Unreachable);
    let errors = console.lines_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].line.ends_with("[App][API call] Failed to connect to backend"));
    assert!(errors[0].error.as_deref().unwrap().contains("localhost:8000"));
}

#[tokio::test]
async fn test_malformed_json_is_a_failure() {
    let addr = common::start_mock_backend(200, "<html>not json</html>").await;
    let (mut display, console) = display_for(&format!("http://{addr}"), LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), FAILURE_MESSAGE);
    let errors = console.lines_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].error.as_deref().unwrap().contains("not the expected JSON"));
}

#[tokio::test]
async fn test_server_error_status_is_a_failure() {
    let addr = common::start_mock_backend(503, r#"{"message":"down"}"#).await;
    let (mut display, console) = display_for(&format!("http://{addr}"), LogLevel::Info);

    display.mount().await;

    assert_eq!(display.message(), FAILURE_MESSAGE);
    assert!(console.lines_at(LogLevel::Error)[0].error.as_deref().unwrap().contains("503"));
}

#[tokio::test]
async fn test_error_threshold_hides_success_lines() {
    let addr = common::start_mock_backend(200, r#"{"message":"ok"}"#).await;
    let (mut display, console) = display_for(&format!("http://{addr}"), LogLevel::Error);

    display.mount().await;

    assert_eq!(display.message(), "ok");
    assert!(console.lines().is_empty());
}
