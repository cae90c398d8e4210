//! Tracing layer that forwards formatted log lines to a sink (the TUI log screen).

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

const MAX_LINE_CHARS: usize = 4_000;

/// Builds "message key=value ..." from an event's fields.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (true, _) => self.fields,
            (false, true) => self.message,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={}", name, value).ok();
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// "[LEVEL] target: message key=value", capped so a runaway field cannot flood the screen.
fn format_line(level: &tracing::Level, target: &str, rest: String) -> String {
    let line = if rest.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, rest)
    };
    match line.char_indices().nth(MAX_LINE_CHARS) {
        Some((cut, _)) => format!("{}… ({} bytes)", &line[..cut], line.len()),
        None => line,
    }
}

pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> Option<TuiLogLayer> {
    sink.map(|sink| TuiLogLayer { sink })
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: LogSink,
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        (self.sink)(format_line(metadata.level(), metadata.target(), visitor.finish()));
    }
}
