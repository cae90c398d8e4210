//! Subscriber initialization

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogConfig, LogOutput};
use crate::error::ObservabilityError;
use crate::tui_log_layer;

fn build_filter(directive: &str) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(directive)
        .map_err(|e| ObservabilityError::Config(format!("invalid log filter {directive:?}: {e}")))
}

/// Installs the global subscriber. Fails if one is already set or the
/// filter directive does not parse.
pub fn init(config: LogConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(config.directive())?;

    let (fmt_layer, sink) = match &config.output {
        LogOutput::Stderr => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogOutput::Sink(sink) => (None, Some(sink.clone())),
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(tui_log_layer::tui_log_layer(sink))
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        version = config.version.unwrap_or("unknown"),
        filter = config.directive(),
        output = ?config.output,
        "logging initialized"
    );
    Ok(())
}
