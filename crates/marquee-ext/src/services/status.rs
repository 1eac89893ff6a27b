//! Launcher status state shared with extensions.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Snapshot of the launcher's mutable status fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusState {
    /// Text displayed on the developer page console.
    pub dev_console_text: String,
}

/// Keys into [`StatusState`], one per settable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    /// [`StatusState::dev_console_text`].
    DevConsoleText,
}

/// Shared, thread-safe view of the launcher status.
///
/// Extensions update individual fields through [`StatusService::set_status`];
/// the host renders whatever the current snapshot says.
#[derive(Clone, Debug, Default)]
pub struct StatusService {
    state: Arc<Mutex<StatusState>>,
}

impl StatusService {
    /// Create a status service with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StatusState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current status.
    #[must_use]
    pub fn snapshot(&self) -> StatusState {
        self.lock().clone()
    }

    /// Current developer console text.
    #[must_use]
    pub fn dev_console_text(&self) -> String {
        self.lock().dev_console_text.clone()
    }

    /// Update one status field.
    pub fn set_status(&self, field: StatusField, value: impl Into<String>) {
        let mut state = self.lock();
        match field {
            StatusField::DevConsoleText => state.dev_console_text = value.into(),
        }
    }
}
