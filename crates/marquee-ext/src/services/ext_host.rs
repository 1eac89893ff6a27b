//! `ExtensionHost` - the primary composition facade.
//!
//! The host's bootstrap builds one `ExtensionHost` from its stores and log
//! sink, then mints an [`ExtensionApi`] per loaded extension. The api handle
//! is the whole surface an extension sees.

use std::sync::Arc;

use serde_json::Value;

use crate::context::ExtensionContext;
use crate::dispose::Disposable;
use crate::ports::{CoreError, HostStores, LogSink};

use super::{CommandRegistry, CommandResult, ExtensionLogger, GamesService, StatusService};

/// Launcher-side owner of the shared extension services.
///
/// Constructed once at the composition root with concrete store and sink
/// implementations.
///
/// # Example
///
/// ```ignore
/// let stores = HostStores::new(game_catalog, playlist_store);
/// let host = ExtensionHost::new("12.1.0", stores, Arc::new(TracingSink::new()));
///
/// // On extension activation:
/// let api = host.api_for("curator-tools");
/// ```
pub struct ExtensionHost {
    version: String,
    games: Arc<GamesService>,
    commands: CommandRegistry,
    status: StatusService,
    log_sink: Arc<dyn LogSink>,
}

impl ExtensionHost {
    /// Create a host facade for the given launcher `version`.
    #[must_use]
    pub fn new(version: impl Into<String>, stores: HostStores, log_sink: Arc<dyn LogSink>) -> Self {
        Self {
            version: version.into(),
            games: Arc::new(GamesService::new(stores)),
            commands: CommandRegistry::new(),
            status: StatusService::new(),
            log_sink,
        }
    }

    /// Version of the launcher.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Access the shared games service (e.g. to announce launches).
    #[must_use]
    pub fn games(&self) -> &GamesService {
        &self.games
    }

    /// Access the shared command registry (e.g. to dispatch a menu action).
    #[must_use]
    pub const fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Access the shared status state.
    #[must_use]
    pub const fn status(&self) -> &StatusService {
        &self.status
    }

    /// Mint the api handle for one extension.
    ///
    /// Each call creates a fresh [`ExtensionContext`]; the host keeps the
    /// handle (or at least its context) to dispose on deactivation.
    #[must_use]
    pub fn api_for(&self, extension: impl Into<String>) -> ExtensionApi {
        ExtensionApi {
            version: self.version.clone(),
            log: ExtensionLogger::new(extension, Arc::clone(&self.log_sink)),
            context: ExtensionContext::new(),
            games: Arc::clone(&self.games),
            commands: self.commands.clone(),
            status: self.status.clone(),
        }
    }
}

/// The api surface handed to one extension.
///
/// Everything here is a view onto host-shared state except `log` (bound to
/// the extension's name) and `context` (the extension's own disposables).
pub struct ExtensionApi {
    version: String,
    /// Leveled logging, extension name filled in automatically.
    pub log: ExtensionLogger,
    /// Lifecycle context; disposed by the host on deactivation.
    pub context: ExtensionContext,
    games: Arc<GamesService>,
    commands: CommandRegistry,
    status: StatusService,
}

impl ExtensionApi {
    /// Version of the launcher.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Catalog operations and the game-launch event.
    #[must_use]
    pub fn games(&self) -> &GamesService {
        &self.games
    }

    /// The shared command registry.
    #[must_use]
    pub const fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The shared status state.
    #[must_use]
    pub const fn status(&self) -> &StatusService {
        &self.status
    }

    /// Register a command and park its registration on this extension's
    /// context, so deactivation unregisters it automatically.
    pub fn register_command(
        &self,
        command: impl Into<String>,
        callback: impl Fn(&[Value]) -> CommandResult + Send + Sync + 'static,
    ) -> Result<Disposable, CoreError> {
        let registration = self.commands.register(command, callback)?;
        self.context
            .track(registration.clone())
            .map_err(|e| CoreError::Internal(e.to_string()))?;
        Ok(registration)
    }
}
