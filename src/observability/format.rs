//! Line template shared by every log producer.
//!
//! ```text
//! [YYYY-MM-DD HH:MM:SS,mmm][fileName][component][reason] message
//! ```

use chrono::{Local, NaiveDateTime};

use super::context::LogContext;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Current local time in the log timestamp format.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Render one line from its already-resolved segments.
pub fn format_segments(timestamp: &str, file_name: &str, component: &str, reason: &str, message: &str) -> String {
    format!("[{timestamp}][{file_name}][{component}][{reason}] {message}")
}

pub fn format_line(at: &NaiveDateTime, context: &LogContext<'_>, message: &str) -> String {
    format_segments(
        &format_timestamp(at),
        context.file_label(),
        context.component,
        context.reason,
        message,
    )
}
