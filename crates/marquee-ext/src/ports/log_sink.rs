//! Log sink port for extension log capture.
//!
//! This port abstracts the destination of extension log messages, allowing
//! different implementations for the host UI's log page, plain process
//! logging, and tests.

use serde::{Deserialize, Serialize};

/// Severity of a log message, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, matching the wire encoding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Port for appending extension log messages to a sink.
///
/// Implementations should be thread-safe and non-blocking where possible.
///
/// # Arguments to `append`
///
/// * `level` - Severity of the message
/// * `source` - Name of the extension that produced the message
/// * `message` - The message content (without trailing newline)
pub trait LogSink: Send + Sync {
    /// Append one log message.
    fn append(&self, level: LogLevel, source: &str, message: &str);
}

/// A sink that forwards to the `tracing` ecosystem.
///
/// This is the default for hosts that already run a `tracing` subscriber;
/// the extension name travels as the `extension` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing-backed sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn append(&self, level: LogLevel, source: &str, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(extension = source, "{message}"),
            LogLevel::Debug => tracing::debug!(extension = source, "{message}"),
            LogLevel::Info => tracing::info!(extension = source, "{message}"),
            LogLevel::Warn => tracing::warn!(extension = source, "{message}"),
            LogLevel::Error => tracing::error!(extension = source, "{message}"),
        }
    }
}

/// A no-op sink for tests and contexts without log capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for NoopSink {
    fn append(&self, _level: LogLevel, _source: &str, _message: &str) {
        // Intentionally do nothing
    }
}
