//! Playlist domain types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, authored collection of games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// ID of the playlist (unique identifier).
    pub id: String,
    /// Entries in this playlist, in play order.
    pub games: Vec<PlaylistGame>,
    /// Title of the playlist.
    pub title: String,
    /// Description of the playlist.
    pub description: String,
    /// Author of the playlist.
    pub author: String,
    /// Icon of the playlist (base64 encoded image).
    pub icon: String,
    /// Route of the library this playlist is for.
    pub library: String,
}

impl Playlist {
    /// Create an empty playlist with a fresh v4 UUID.
    #[must_use]
    pub fn new(title: impl Into<String>, library: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            games: Vec::new(),
            title: title.into(),
            description: String::new(),
            author: String::new(),
            icon: String::new(),
            library: library.into(),
        }
    }
}

/// One game's membership in a playlist.
///
/// Orders the referenced game within the playlist and may carry notes that
/// apply only inside this playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistGame {
    /// ID of this entry. `None` before first persistence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ID of the playlist which owns this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    /// Order priority of the game in the playlist.
    pub order: i32,
    /// Notes for the game inside this playlist specifically.
    pub notes: String,
    /// ID of the game this entry represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
}

impl PlaylistGame {
    /// Create an entry placing `game_id` at `order` within `playlist_id`.
    #[must_use]
    pub fn new(
        playlist_id: impl Into<String>,
        game_id: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            playlist_id: Some(playlist_id.into()),
            order,
            notes: String::new(),
            game_id: Some(game_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_playlist_is_empty() {
        let playlist = Playlist::new("Hidden Gems", "arcade");
        assert!(!playlist.id.is_empty());
        assert!(playlist.games.is_empty());
        assert_eq!(playlist.library, "arcade");
    }

    #[test]
    fn test_playlist_game_links_both_sides() {
        let playlist = Playlist::new("Hidden Gems", "arcade");
        let entry = PlaylistGame::new(&playlist.id, "game-1", 0);

        assert_eq!(entry.playlist_id.as_deref(), Some(playlist.id.as_str()));
        assert_eq!(entry.game_id.as_deref(), Some("game-1"));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"playlistId\""));
        assert!(json.contains("\"gameId\":\"game-1\""));
    }
}
