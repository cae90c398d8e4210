//! Logging for the docchat binary.
//!
//! One-shot commands write formatted events to stderr. The TUI routes every
//! line into its log screen through a [`LogSink`] instead.
//!
//! ```no_run
//! use docchat_observability::{LogConfig, init};
//!
//! init(LogConfig::stderr("warn").with_version("0.1.0"))?;
//! tracing::warn!("backend slow");
//! # Ok::<(), docchat_observability::ObservabilityError>(())
//! ```
//!
//! `DOCCHAT_LOG`, then `RUST_LOG`, override the caller's default directive.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;
pub mod tui_log_layer;

pub use config::{LogConfig, LogOutput, LogSink};
pub use error::ObservabilityError;
pub use telemetry::init;
pub use crate::tracing::{record_duration, record_error};
