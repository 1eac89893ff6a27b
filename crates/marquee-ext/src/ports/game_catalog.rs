//! Game catalog trait definition.
//!
//! This port defines the interface for game lookups and writes. The host
//! owns the backing store; implementations handle all storage details
//! internally.

use async_trait::async_trait;

use super::CatalogError;
use crate::domain::{Game, Tag};

/// Host-side catalog of games.
///
/// Every call is an asynchronous request into the host. No ordering is
/// guaranteed between independent calls beyond what the host itself
/// provides.
///
/// # Design Rules
///
/// - Lookups return `Ok(None)` when nothing matches
/// - Writes return the persisted record as the host now sees it
/// - Validation (placeholder rejection etc.) belongs in `GamesService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameCatalog: Send + Sync {
    /// Total number of games in the catalog.
    async fn count_games(&self) -> Result<u64, CatalogError>;

    /// Look up a game by id.
    async fn find_game(&self, id: &str) -> Result<Option<Game>, CatalogError>;

    /// All games carrying `tag`.
    async fn find_games_with_tag(&self, tag: &Tag) -> Result<Vec<Game>, CatalogError>;

    /// Persist `game`, returning the stored record.
    ///
    /// Returns `Err(CatalogError::NotFound)` if the game does not exist and
    /// the host does not create on write.
    async fn update_game(&self, game: &Game) -> Result<Game, CatalogError>;

    /// Persist a batch of games.
    async fn update_games(&self, games: &[Game]) -> Result<(), CatalogError>;

    /// Remove a game together with its additional applications.
    ///
    /// Returns the removed game, or `Ok(None)` if no such game existed.
    async fn remove_game_and_add_apps(&self, id: &str) -> Result<Option<Game>, CatalogError>;

    /// Distinct platforms present in `library`.
    async fn find_platforms(&self, library: &str) -> Result<Vec<String>, CatalogError>;
}
