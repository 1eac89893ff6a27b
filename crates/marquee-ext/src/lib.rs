//! Extension API surface for the Marquee launcher.
//!
//! Everything a Marquee extension can see or touch lives in this crate: the
//! catalog's domain records ([`Game`], [`Tag`], [`Playlist`], ...), the
//! asynchronous ports the launcher implements ([`GameCatalog`],
//! [`PlaylistStore`], [`LogSink`]), the contract-side services built on them
//! (commands, status, logging, the games facade), and the two lifecycle
//! primitives that hold it together: [`Disposable`] trees and [`Event`]
//! subscriptions.
//!
//! The launcher's bootstrap wires concrete stores into an [`ExtensionHost`]
//! and mints one [`ExtensionApi`] per extension:
//!
//! ```
//! use std::sync::Arc;
//! use marquee_ext::{ExtensionHost, HostStores, NoopSink};
//! # use marquee_ext::{CatalogError, Game, GameCatalog, Playlist, PlaylistGame, PlaylistStore, Tag};
//! # use async_trait::async_trait;
//! # struct Empty;
//! # #[async_trait]
//! # impl GameCatalog for Empty {
//! #     async fn count_games(&self) -> Result<u64, CatalogError> { Ok(0) }
//! #     async fn find_game(&self, _id: &str) -> Result<Option<Game>, CatalogError> { Ok(None) }
//! #     async fn find_games_with_tag(&self, _tag: &Tag) -> Result<Vec<Game>, CatalogError> { Ok(vec![]) }
//! #     async fn update_game(&self, game: &Game) -> Result<Game, CatalogError> { Ok(game.clone()) }
//! #     async fn update_games(&self, _games: &[Game]) -> Result<(), CatalogError> { Ok(()) }
//! #     async fn remove_game_and_add_apps(&self, _id: &str) -> Result<Option<Game>, CatalogError> { Ok(None) }
//! #     async fn find_platforms(&self, _library: &str) -> Result<Vec<String>, CatalogError> { Ok(vec![]) }
//! # }
//! # #[async_trait]
//! # impl PlaylistStore for Empty {
//! #     async fn find_playlist(&self, _id: &str, _join: bool) -> Result<Option<Playlist>, CatalogError> { Ok(None) }
//! #     async fn find_playlist_by_name(&self, _name: &str, _join: bool) -> Result<Option<Playlist>, CatalogError> { Ok(None) }
//! #     async fn find_playlists(&self) -> Result<Vec<Playlist>, CatalogError> { Ok(vec![]) }
//! #     async fn update_playlist(&self, playlist: &Playlist) -> Result<Playlist, CatalogError> { Ok(playlist.clone()) }
//! #     async fn remove_playlist(&self, _id: &str) -> Result<Option<Playlist>, CatalogError> { Ok(None) }
//! #     async fn find_playlist_game(&self, _playlist_id: &str, _game_id: &str) -> Result<Option<PlaylistGame>, CatalogError> { Ok(None) }
//! #     async fn remove_playlist_game(&self, _playlist_id: &str, _game_id: &str) -> Result<Option<PlaylistGame>, CatalogError> { Ok(None) }
//! #     async fn update_playlist_game(&self, playlist_game: &PlaylistGame) -> Result<PlaylistGame, CatalogError> { Ok(playlist_game.clone()) }
//! #     async fn update_playlist_games(&self, _playlist_games: &[PlaylistGame]) -> Result<(), CatalogError> { Ok(()) }
//! # }
//! let store = Arc::new(Empty);
//! let stores = HostStores::new(store.clone(), store);
//! let host = ExtensionHost::new("12.1.0", stores, Arc::new(NoopSink::new()));
//!
//! let api = host.api_for("curator-tools");
//! api.log.info("activated");
//! api.register_command("curate.hello", |_| Ok(serde_json::json!("hi"))).unwrap();
//!
//! // Deactivation releases everything the extension registered.
//! api.context.subscriptions.dispose();
//! assert!(!host.commands().is_registered("curate.hello"));
//! ```
#![deny(unused_crate_dependencies)]

pub mod context;
pub mod dispose;
pub mod domain;
pub mod events;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use context::ExtensionContext;
pub use dispose::{Disposable, DisposeError};
pub use domain::{AdditionalApp, Game, Playlist, PlaylistGame, Tag, TagAlias, TagCategory};
pub use events::{Event, EventEmitter};
pub use ports::{
    CatalogError, CoreError, GameCatalog, HostStores, LogLevel, LogSink, NoopSink, PlaylistStore,
    TracingSink,
};
pub use services::{
    CommandError, CommandRegistry, CommandResult, ExtensionApi, ExtensionHost, ExtensionLogger,
    GamesService, StatusField, StatusService, StatusState,
};

// Silence unused dev-dependency warnings from test-only tooling
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use tracing_subscriber as _;
