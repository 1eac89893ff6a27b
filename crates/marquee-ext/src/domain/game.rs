//! Game domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tag::Tag;

/// A playable title in the launcher's catalog.
///
/// This is the full record as the host serializes it. Descriptive fields use
/// the empty string for "none"; only genuinely optional links are `Option`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// ID of the game (unique identifier).
    pub id: String,
    /// ID of the game which owns this game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_game_id: Option<String>,
    /// Full title of the game.
    pub title: String,
    /// Any alternate titles to match against search.
    pub alternate_titles: String,
    /// Game series the game belongs to (empty string if none).
    pub series: String,
    /// Name of the developer(s) of the game (developer names are separated by ',').
    pub developer: String,
    /// Name of the publisher of the game.
    pub publisher: String,
    /// When the game was added to the catalog.
    pub date_added: DateTime<Utc>,
    /// When the game record was last modified.
    pub date_modified: DateTime<Utc>,
    /// Platform the game runs on (Flash, HTML5, Shockwave etc.).
    pub platform: String,
    /// If the game is "broken" or not.
    pub broken: bool,
    /// Game is not suitable for children.
    pub extreme: bool,
    /// If the game is single player or multiplayer, and if the multiplayer
    /// is cooperative or not.
    pub play_mode: String,
    /// How playable the game is.
    pub status: String,
    /// Information that could be useful for the player (of varying importance).
    pub notes: String,
    /// List of tags attached to the game.
    pub tags: Vec<Tag>,
    /// Source of the game files, either full URL or the name of the website.
    pub source: String,
    /// Path to the application that runs the game.
    pub application_path: String,
    /// Command line argument(s) passed to the application to launch the game.
    pub launch_command: String,
    /// Date of when the game was released (possibly partial, e.g. a year only).
    pub release_date: String,
    /// Version of the game.
    pub version: String,
    /// Original description of the game (probably given by the game's
    /// creator or publisher).
    pub original_description: String,
    /// The language(s) the game is in.
    pub language: String,
    /// Library this game belongs to.
    pub library: String,
    /// All attached additional applications of the game.
    pub add_apps: Vec<AdditionalApp>,
    /// Unused legacy sort key, kept for wire compatibility.
    pub order_title: String,
    /// If the game is a placeholder (and can therefore not be saved).
    pub placeholder: bool,
}

impl Game {
    /// Create a game with minimal required fields.
    ///
    /// A fresh v4 UUID is minted for the id; everything else is empty.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        platform: impl Into<String>,
        library: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            parent_game_id: None,
            title: title.into(),
            alternate_titles: String::new(),
            series: String::new(),
            developer: String::new(),
            publisher: String::new(),
            date_added: now,
            date_modified: now,
            platform: platform.into(),
            broken: false,
            extreme: false,
            play_mode: String::new(),
            status: String::new(),
            notes: String::new(),
            tags: Vec::new(),
            source: String::new(),
            application_path: String::new(),
            launch_command: String::new(),
            release_date: String::new(),
            version: String::new(),
            original_description: String::new(),
            language: String::new(),
            library: library.into(),
            add_apps: Vec::new(),
            order_title: String::new(),
            placeholder: false,
        }
    }

    /// Create a non-persistable stand-in game (e.g. for a missing entry).
    #[must_use]
    pub fn new_placeholder(title: impl Into<String>) -> Self {
        let mut game = Self::new(title, "", "");
        game.placeholder = true;
        game
    }

    /// Whether `tag` is attached to this game.
    ///
    /// Matches by numeric id when both sides have one, otherwise by primary
    /// alias name.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|own| match (own.id, tag.id) {
            (Some(a), Some(b)) => a == b,
            _ => own.name() == tag.name(),
        })
    }
}

/// A secondary launchable entity belonging to exactly one [`Game`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalApp {
    /// ID of the additional application (unique identifier).
    pub id: String,
    /// Path to the application that runs the additional application.
    pub application_path: String,
    /// If the additional application should run before the game.
    ///
    /// When true it always runs on game launch; when false it only runs when
    /// launched specifically.
    pub auto_run_before: bool,
    /// Command line argument(s) passed to the application on launch.
    pub launch_command: String,
    /// Name of the additional application.
    pub name: String,
    /// Wait for this to exit before the game launches (if starting before launch).
    pub wait_for_exit: bool,
    /// ID of the owning game.
    pub parent_game_id: String,
}

impl AdditionalApp {
    /// Create an additional application for `parent_game_id`.
    #[must_use]
    pub fn new(
        parent_game_id: impl Into<String>,
        name: impl Into<String>,
        application_path: impl Into<String>,
        launch_command: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            application_path: application_path.into(),
            auto_run_before: false,
            launch_command: launch_command.into(),
            name: name.into(),
            wait_for_exit: false,
            parent_game_id: parent_game_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new("Interactive Buddy", "Flash", "arcade");

        assert!(!game.id.is_empty());
        assert_eq!(game.title, "Interactive Buddy");
        assert_eq!(game.platform, "Flash");
        assert_eq!(game.library, "arcade");
        assert!(game.series.is_empty());
        assert!(game.tags.is_empty());
        assert!(game.add_apps.is_empty());
        assert!(!game.placeholder);
        assert_eq!(game.date_added, game.date_modified);
    }

    #[test]
    fn test_placeholder_is_flagged() {
        let game = Game::new_placeholder("Missing Entry");
        assert!(game.placeholder);
    }

    #[test]
    fn test_has_tag_matches_by_id_then_name() {
        let mut by_id = Tag::new("action");
        by_id.id = Some(7);
        let mut by_name = Tag::new("puzzle");
        by_name.id = None;

        let mut game = Game::new("Some Game", "Flash", "arcade");
        game.tags = vec![by_id.clone(), by_name.clone()];

        let mut probe = Tag::new("renamed");
        probe.id = Some(7);
        assert!(game.has_tag(&probe));
        assert!(game.has_tag(&Tag::new("puzzle")));
        assert!(!game.has_tag(&Tag::new("sports")));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut game = Game::new("Wire Check", "HTML5", "arcade");
        game.application_path = "fpsoftware/browser.exe".to_string();
        game.add_apps
            .push(AdditionalApp::new(&game.id, "Manual", "viewer.exe", "--manual"));

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"applicationPath\":\"fpsoftware/browser.exe\""));
        assert!(json.contains("\"dateAdded\""));
        assert!(json.contains("\"addApps\""));
        assert!(json.contains("\"autoRunBefore\":false"));
        assert!(json.contains("\"orderTitle\""));
        // Absent parent link stays off the wire entirely.
        assert!(!json.contains("parentGameId"));
    }
}
