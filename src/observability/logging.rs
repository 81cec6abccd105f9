//! Structured logging for the API service.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber
//! - Render events in the same line template as [`Logger`](super::Logger)
//! - Honor `RUST_LOG` when set, otherwise the configured level
//!
//! Events carry their context as fields:
//!
//! ```ignore
//! tracing::info!(component = "main", reason = "API call", "Root endpoint accessed");
//! ```
//!
//! `component` falls back to the event target and `reason` to the event
//! level. Remaining fields are appended as `key=value`.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::context::{source_file_name, UNKNOWN_FILE};
use super::format::{format_segments, now_timestamp};
use super::level::LogLevel;

/// Event formatter producing `[ts][file][component][reason] message`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaimsFormat;

impl<S, N> FormatEvent<S, N> for ClaimsFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, _ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = ContextFields::default();
        event.record(&mut fields);

        let level = meta.level().as_str();
        let line = format_segments(
            &now_timestamp(),
            meta.file().map(source_file_name).unwrap_or(UNKNOWN_FILE),
            fields.component.as_deref().unwrap_or(meta.target()),
            fields.reason.as_deref().unwrap_or(level),
            &fields.message(),
        );
        writeln!(writer, "{line}")
    }
}

/// Collects the context fields of one event.
#[derive(Debug, Default)]
struct ContextFields {
    component: Option<String>,
    reason: Option<String>,
    message: String,
    extra: String,
}

impl ContextFields {
    fn message(&self) -> String {
        format!("{}{}", self.message, self.extra)
    }

    fn record_value(&mut self, field: &Field, value: String) {
        match field.name() {
            "component" => self.component = Some(value),
            "reason" => self.reason = Some(value),
            "message" => self.message = value,
            name => {
                let _ = write!(self.extra, " {name}={value}");
            }
        }
    }
}

impl Visit for ContextFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }
}

/// Default filter directives when `RUST_LOG` is not set.
pub fn default_directives(level: LogLevel) -> String {
    format!("claims_status={level},tower_http={level}")
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(level).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(ClaimsFormat))
        .try_init();
}
