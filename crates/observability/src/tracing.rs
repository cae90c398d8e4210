//! Command spans and the helpers that annotate them.

/// Create a span for one CLI command
///
/// # Example
///
/// ```rust
/// use docchat_observability::command_span;
///
/// let span = command_span!("journals");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr) => {
        tracing::info_span!(
            "command",
            command = $command,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record a duration in milliseconds on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
