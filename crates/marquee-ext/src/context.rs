//! Per-extension lifecycle context.

use crate::dispose::{Disposable, DisposeError};

/// Lifecycle context handed to an extension on activation.
///
/// Everything the extension registers (commands, event subscriptions) should
/// be parked on `subscriptions` so that deactivation is a single dispose.
#[derive(Clone, Debug, Default)]
pub struct ExtensionContext {
    /// Root of the extension's disposables. The host disposes this when the
    /// extension deactivates.
    pub subscriptions: Disposable,
}

impl ExtensionContext {
    /// Create a context with an empty subscription root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `disposable` on the subscription root.
    pub fn track(&self, disposable: Disposable) -> Result<(), DisposeError> {
        self.subscriptions.register(disposable)
    }
}
