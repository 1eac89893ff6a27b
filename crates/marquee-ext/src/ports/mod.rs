//! Port definitions (trait abstractions) for the host process.
//!
//! Ports define the interfaces the extension surface expects from the host.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No storage or IPC types in any signature
//! - Absence is `Ok(None)`, not an error; errors mean the host failed
//! - Traits are minimal and CRUD-focused
//! - Every port is `Send + Sync` so adapters can share it behind `Arc`

pub mod game_catalog;
pub mod log_sink;
pub mod playlist_store;

use std::sync::Arc;
use thiserror::Error;

pub use game_catalog::GameCatalog;
pub use log_sink::{LogLevel, LogSink, NoopSink, TracingSink};
pub use playlist_store::PlaylistStore;

use crate::services::CommandError;

/// Container for the host's store trait objects.
///
/// This struct provides a consistent way to wire stores across adapters
/// without coupling them to concrete implementations. The composition root
/// builds it once and hands it to [`ExtensionHost::new`].
///
/// [`ExtensionHost::new`]: crate::services::ExtensionHost::new
///
/// # Example
///
/// ```ignore
/// // In the host's bootstrap:
/// let stores = HostStores::new(game_catalog, playlist_store);
/// let host = ExtensionHost::new(version, stores, sink);
/// ```
#[derive(Clone)]
pub struct HostStores {
    /// Game catalog for game CRUD operations.
    pub games: Arc<dyn GameCatalog>,
    /// Playlist store for playlist and playlist-entry operations.
    pub playlists: Arc<dyn PlaylistStore>,
}

impl HostStores {
    /// Create a new `HostStores` container.
    #[must_use]
    pub fn new(games: Arc<dyn GameCatalog>, playlists: Arc<dyn PlaylistStore>) -> Self {
        Self { games, playlists }
    }
}

/// Domain-specific errors for catalog and store operations.
///
/// This error type abstracts away the host's storage details and gives
/// services a clean interface for handling store failures. Lookups signal
/// absence with `Ok(None)` rather than an error variant; `NotFound` is for
/// writes against records that must already exist.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A write referenced an entity that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type at the extension-facing service
/// boundary. Hosts map it onto their own transport (IPC payloads, process
/// exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog or store operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Command registry operation failed.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
