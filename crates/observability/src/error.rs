//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during subscriber initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber was already installed, or the filter could not be built
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
