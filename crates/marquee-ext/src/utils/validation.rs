//! Input validation for catalog writes.
//!
//! Services run these before handing records to the host; the host may
//! reject more, but these rules hold everywhere.

use anyhow::{Result, bail};

use crate::domain::{Game, Playlist};

/// Validates that a game can be persisted.
///
/// Placeholder games are stand-ins and must never reach the catalog.
///
/// # Examples
///
/// ```rust
/// use marquee_ext::domain::Game;
/// use marquee_ext::utils::validation::validate_game;
///
/// let game = Game::new("Some Title", "Flash", "arcade");
/// assert!(validate_game(&game).is_ok());
///
/// let placeholder = Game::new_placeholder("Missing");
/// assert!(validate_game(&placeholder).is_err());
/// ```
pub fn validate_game(game: &Game) -> Result<()> {
    if game.placeholder {
        bail!("placeholder games cannot be saved");
    }
    if game.id.is_empty() {
        bail!("game id must not be empty");
    }
    if game.title.is_empty() {
        bail!("game title must not be empty");
    }
    Ok(())
}

/// Validates that a playlist can be persisted.
pub fn validate_playlist(playlist: &Playlist) -> Result<()> {
    if playlist.id.is_empty() {
        bail!("playlist id must not be empty");
    }
    if playlist.title.is_empty() {
        bail!("playlist title must not be empty");
    }
    Ok(())
}
