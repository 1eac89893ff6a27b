//! Per-extension leveled logging.

use std::fmt;
use std::sync::Arc;

use crate::ports::{LogLevel, LogSink};

/// Logging handle bound to one extension.
///
/// Messages land in the host's log page with the extension name filled in
/// automatically; the extension only supplies the text.
#[derive(Clone)]
pub struct ExtensionLogger {
    extension: String,
    sink: Arc<dyn LogSink>,
}

impl ExtensionLogger {
    /// Create a logger for `extension` writing to `sink`.
    #[must_use]
    pub fn new(extension: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            extension: extension.into(),
            sink,
        }
    }

    /// Name of the extension this logger is bound to.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.append(LogLevel::Trace, message);
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.append(LogLevel::Debug, message);
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.append(LogLevel::Info, message);
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.append(LogLevel::Warn, message);
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.append(LogLevel::Error, message);
    }

    fn append(&self, level: LogLevel, message: &str) {
        self.sink.append(level, &self.extension, message);
    }
}

impl fmt::Debug for ExtensionLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionLogger")
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}
