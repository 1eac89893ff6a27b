//! Playlist store trait definition.

use async_trait::async_trait;

use super::CatalogError;
use crate::domain::{Playlist, PlaylistGame};

/// Host-side store of playlists and their entries.
///
/// The `join` flag on lookups controls whether the returned playlist has its
/// `games` entries populated; how deep the join goes is the store's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Look up a playlist by id.
    async fn find_playlist(&self, id: &str, join: bool) -> Result<Option<Playlist>, CatalogError>;

    /// Look up a playlist by exact title.
    async fn find_playlist_by_name(
        &self,
        name: &str,
        join: bool,
    ) -> Result<Option<Playlist>, CatalogError>;

    /// All playlists, entries not populated.
    async fn find_playlists(&self) -> Result<Vec<Playlist>, CatalogError>;

    /// Persist `playlist`, returning the stored record.
    async fn update_playlist(&self, playlist: &Playlist) -> Result<Playlist, CatalogError>;

    /// Remove a playlist, returning it, or `Ok(None)` if it did not exist.
    async fn remove_playlist(&self, id: &str) -> Result<Option<Playlist>, CatalogError>;

    /// Look up one game's entry within a playlist.
    async fn find_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CatalogError>;

    /// Remove one game's entry from a playlist, returning the removed entry.
    async fn remove_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CatalogError>;

    /// Persist a playlist entry, returning the stored record.
    async fn update_playlist_game(
        &self,
        playlist_game: &PlaylistGame,
    ) -> Result<PlaylistGame, CatalogError>;

    /// Persist a batch of playlist entries.
    async fn update_playlist_games(
        &self,
        playlist_games: &[PlaylistGame],
    ) -> Result<(), CatalogError>;
}
