//! Where log lines go and which ones pass the filter.

use std::sync::Arc;

/// Receives each formatted line for the TUI log screen. Called from the
/// tracing layer, so it must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Checked before `RUST_LOG`.
pub const FILTER_ENV: &str = "DOCCHAT_LOG";

#[derive(Clone)]
pub enum LogOutput {
    /// One-shot commands: formatted events on stderr.
    Stderr,
    /// The TUI owns the terminal, so lines are handed to the log screen instead.
    Sink(LogSink),
}

impl std::fmt::Debug for LogOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::Sink(_) => f.write_str("Sink(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub output: LogOutput,
    /// Directive used when neither `DOCCHAT_LOG` nor `RUST_LOG` is set.
    pub default_filter: String,
    /// Set from the environment; wins over `default_filter`.
    pub env_filter: Option<String>,
    /// Binary version, logged once at startup.
    pub version: Option<&'static str>,
}

impl LogConfig {
    pub fn stderr(default_filter: impl Into<String>) -> Self {
        Self::with_output(LogOutput::Stderr, default_filter)
    }

    pub fn sink(sink: LogSink, default_filter: impl Into<String>) -> Self {
        Self::with_output(LogOutput::Sink(sink), default_filter)
    }

    fn with_output(output: LogOutput, default_filter: impl Into<String>) -> Self {
        Self {
            output,
            default_filter: default_filter.into(),
            env_filter: Self::lookup_filter(|key| std::env::var(key).ok()),
            version: None,
        }
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = Some(version);
        self
    }

    /// Directive the subscriber is built from.
    pub fn directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.default_filter)
    }

    fn lookup_filter(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        [FILTER_ENV, "RUST_LOG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
    }
}
