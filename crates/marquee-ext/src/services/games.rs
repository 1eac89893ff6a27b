//! Games service - the extension-facing view of the catalog.
//!
//! Wraps the host's stores, applies the write rules the host enforces
//! everywhere (placeholder rejection, modification stamping), and owns the
//! game-launch event stream.

use chrono::Utc;

use crate::domain::{Game, Playlist, PlaylistGame, Tag};
use crate::events::{Event, EventEmitter};
use crate::ports::{CoreError, HostStores};
use crate::utils::validation::{validate_game, validate_playlist};

/// Extension-facing catalog operations.
///
/// One instance is shared by every extension; per-extension state lives in
/// [`ExtensionApi`](crate::services::ExtensionApi), not here.
pub struct GamesService {
    stores: HostStores,
    launch_events: EventEmitter<Game>,
}

impl GamesService {
    /// Create a games service over the host's stores.
    #[must_use]
    pub fn new(stores: HostStores) -> Self {
        Self {
            stores,
            launch_events: EventEmitter::new(),
        }
    }

    // ───────────────────────── Games ─────────────────────────

    /// Total number of games in the catalog.
    pub async fn count_games(&self) -> Result<u64, CoreError> {
        self.stores.games.count_games().await.map_err(CoreError::from)
    }

    /// Look up a game by id.
    pub async fn find_game(&self, id: &str) -> Result<Option<Game>, CoreError> {
        self.stores.games.find_game(id).await.map_err(CoreError::from)
    }

    /// All games carrying `tag`.
    pub async fn find_games_with_tag(&self, tag: &Tag) -> Result<Vec<Game>, CoreError> {
        self.stores
            .games
            .find_games_with_tag(tag)
            .await
            .map_err(CoreError::from)
    }

    /// Persist `game` and return the stored record.
    ///
    /// Rejects placeholder games and empty ids/titles; refreshes the
    /// modification stamp before handing the record to the host.
    pub async fn update_game(&self, game: &Game) -> Result<Game, CoreError> {
        validate_game(game).map_err(|e| CoreError::Validation(e.to_string()))?;
        let mut game = game.clone();
        game.date_modified = Utc::now();
        Ok(self.stores.games.update_game(&game).await?)
    }

    /// Persist a batch of games under the same rules as [`Self::update_game`].
    ///
    /// The batch is validated up front; nothing is written if any element is
    /// rejected.
    pub async fn update_games(&self, games: &[Game]) -> Result<(), CoreError> {
        for game in games {
            validate_game(game).map_err(|e| CoreError::Validation(e.to_string()))?;
        }
        let now = Utc::now();
        let stamped: Vec<Game> = games
            .iter()
            .map(|game| {
                let mut game = game.clone();
                game.date_modified = now;
                game
            })
            .collect();
        Ok(self.stores.games.update_games(&stamped).await?)
    }

    /// Remove a game together with its additional applications.
    pub async fn remove_game_and_add_apps(&self, id: &str) -> Result<Option<Game>, CoreError> {
        self.stores
            .games
            .remove_game_and_add_apps(id)
            .await
            .map_err(CoreError::from)
    }

    /// Distinct platforms present in `library`.
    pub async fn find_platforms(&self, library: &str) -> Result<Vec<String>, CoreError> {
        self.stores
            .games
            .find_platforms(library)
            .await
            .map_err(CoreError::from)
    }

    // ─────────────────────── Playlists ───────────────────────

    /// Look up a playlist by id; `join` populates its entries.
    pub async fn find_playlist(
        &self,
        id: &str,
        join: bool,
    ) -> Result<Option<Playlist>, CoreError> {
        self.stores
            .playlists
            .find_playlist(id, join)
            .await
            .map_err(CoreError::from)
    }

    /// Look up a playlist by exact title; `join` populates its entries.
    pub async fn find_playlist_by_name(
        &self,
        name: &str,
        join: bool,
    ) -> Result<Option<Playlist>, CoreError> {
        self.stores
            .playlists
            .find_playlist_by_name(name, join)
            .await
            .map_err(CoreError::from)
    }

    /// All playlists, entries not populated.
    pub async fn find_playlists(&self) -> Result<Vec<Playlist>, CoreError> {
        self.stores.playlists.find_playlists().await.map_err(CoreError::from)
    }

    /// Persist `playlist` and return the stored record.
    pub async fn update_playlist(&self, playlist: &Playlist) -> Result<Playlist, CoreError> {
        validate_playlist(playlist).map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(self.stores.playlists.update_playlist(playlist).await?)
    }

    /// Remove a playlist, returning it if it existed.
    pub async fn remove_playlist(&self, id: &str) -> Result<Option<Playlist>, CoreError> {
        self.stores
            .playlists
            .remove_playlist(id)
            .await
            .map_err(CoreError::from)
    }

    /// Look up one game's entry within a playlist.
    pub async fn find_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CoreError> {
        self.stores
            .playlists
            .find_playlist_game(playlist_id, game_id)
            .await
            .map_err(CoreError::from)
    }

    /// Remove one game's entry from a playlist, returning the removed entry.
    pub async fn remove_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CoreError> {
        self.stores
            .playlists
            .remove_playlist_game(playlist_id, game_id)
            .await
            .map_err(CoreError::from)
    }

    /// Persist a playlist entry and return the stored record.
    pub async fn update_playlist_game(
        &self,
        playlist_game: &PlaylistGame,
    ) -> Result<PlaylistGame, CoreError> {
        self.stores
            .playlists
            .update_playlist_game(playlist_game)
            .await
            .map_err(CoreError::from)
    }

    /// Persist a batch of playlist entries.
    pub async fn update_playlist_games(
        &self,
        playlist_games: &[PlaylistGame],
    ) -> Result<(), CoreError> {
        self.stores
            .playlists
            .update_playlist_games(playlist_games)
            .await
            .map_err(CoreError::from)
    }

    // ──────────────────────── Events ─────────────────────────

    /// Fired after a game launches.
    #[must_use]
    pub fn on_did_launch_game(&self) -> Event<Game> {
        self.launch_events.event()
    }

    /// Host-side: announce that `game` has launched.
    pub fn notify_game_launched(&self, game: &Game) {
        self.launch_events.emit(game);
    }
}
