//! End-to-end exercise of the extension surface over in-memory stores.
//!
//! These tests play both roles: the launcher (wiring stores and announcing
//! launches) and an extension (consuming the api handle).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use marquee_ext::{
    AdditionalApp, CatalogError, ExtensionHost, Game, GameCatalog, HostStores, LogLevel, LogSink,
    Playlist, PlaylistGame, PlaylistStore, StatusField, Tag, TracingSink,
};

#[derive(Default)]
struct MemoryStores {
    games: Mutex<HashMap<String, Game>>,
    playlists: Mutex<HashMap<String, Playlist>>,
}

#[async_trait]
impl GameCatalog for MemoryStores {
    async fn count_games(&self) -> Result<u64, CatalogError> {
        Ok(self.games.lock().unwrap().len() as u64)
    }

    async fn find_game(&self, id: &str) -> Result<Option<Game>, CatalogError> {
        Ok(self.games.lock().unwrap().get(id).cloned())
    }

    async fn find_games_with_tag(&self, tag: &Tag) -> Result<Vec<Game>, CatalogError> {
        let mut games: Vec<Game> = self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|game| game.has_tag(tag))
            .cloned()
            .collect();
        games.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(games)
    }

    async fn update_game(&self, game: &Game) -> Result<Game, CatalogError> {
        self.games
            .lock()
            .unwrap()
            .insert(game.id.clone(), game.clone());
        Ok(game.clone())
    }

    async fn update_games(&self, games: &[Game]) -> Result<(), CatalogError> {
        let mut map = self.games.lock().unwrap();
        for game in games {
            map.insert(game.id.clone(), game.clone());
        }
        Ok(())
    }

    async fn remove_game_and_add_apps(&self, id: &str) -> Result<Option<Game>, CatalogError> {
        Ok(self.games.lock().unwrap().remove(id))
    }

    async fn find_platforms(&self, library: &str) -> Result<Vec<String>, CatalogError> {
        let mut platforms: Vec<String> = self
            .games
            .lock()
            .unwrap()
            .values()
            .filter(|game| game.library == library)
            .map(|game| game.platform.clone())
            .collect();
        platforms.sort();
        platforms.dedup();
        Ok(platforms)
    }
}

#[async_trait]
impl PlaylistStore for MemoryStores {
    async fn find_playlist(&self, id: &str, join: bool) -> Result<Option<Playlist>, CatalogError> {
        Ok(self
            .playlists
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .map(|playlist| strip_unless_joined(playlist, join)))
    }

    async fn find_playlist_by_name(
        &self,
        name: &str,
        join: bool,
    ) -> Result<Option<Playlist>, CatalogError> {
        Ok(self
            .playlists
            .lock()
            .unwrap()
            .values()
            .find(|playlist| playlist.title == name)
            .cloned()
            .map(|playlist| strip_unless_joined(playlist, join)))
    }

    async fn find_playlists(&self) -> Result<Vec<Playlist>, CatalogError> {
        let mut playlists: Vec<Playlist> = self
            .playlists
            .lock()
            .unwrap()
            .values()
            .cloned()
            .map(|playlist| strip_unless_joined(playlist, false))
            .collect();
        playlists.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(playlists)
    }

    async fn update_playlist(&self, playlist: &Playlist) -> Result<Playlist, CatalogError> {
        self.playlists
            .lock()
            .unwrap()
            .insert(playlist.id.clone(), playlist.clone());
        Ok(playlist.clone())
    }

    async fn remove_playlist(&self, id: &str) -> Result<Option<Playlist>, CatalogError> {
        Ok(self.playlists.lock().unwrap().remove(id))
    }

    async fn find_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CatalogError> {
        Ok(self.playlists.lock().unwrap().get(playlist_id).and_then(|playlist| {
            playlist
                .games
                .iter()
                .find(|entry| entry.game_id.as_deref() == Some(game_id))
                .cloned()
        }))
    }

    async fn remove_playlist_game(
        &self,
        playlist_id: &str,
        game_id: &str,
    ) -> Result<Option<PlaylistGame>, CatalogError> {
        let mut playlists = self.playlists.lock().unwrap();
        let Some(playlist) = playlists.get_mut(playlist_id) else {
            return Ok(None);
        };
        let index = playlist
            .games
            .iter()
            .position(|entry| entry.game_id.as_deref() == Some(game_id));
        Ok(index.map(|index| playlist.games.remove(index)))
    }

    async fn update_playlist_game(
        &self,
        playlist_game: &PlaylistGame,
    ) -> Result<PlaylistGame, CatalogError> {
        let mut playlists = self.playlists.lock().unwrap();
        let playlist_id = playlist_game
            .playlist_id
            .as_deref()
            .ok_or_else(|| CatalogError::Constraint("entry has no playlist id".to_string()))?;
        let playlist = playlists
            .get_mut(playlist_id)
            .ok_or_else(|| CatalogError::NotFound(playlist_id.to_string()))?;
        let slot = playlist
            .games
            .iter_mut()
            .find(|entry| entry.game_id == playlist_game.game_id);
        match slot {
            Some(entry) => *entry = playlist_game.clone(),
            None => playlist.games.push(playlist_game.clone()),
        }
        Ok(playlist_game.clone())
    }

    async fn update_playlist_games(
        &self,
        playlist_games: &[PlaylistGame],
    ) -> Result<(), CatalogError> {
        for playlist_game in playlist_games {
            self.update_playlist_game(playlist_game).await?;
        }
        Ok(())
    }
}

fn strip_unless_joined(playlist: Playlist, join: bool) -> Playlist {
    if join {
        playlist
    } else {
        Playlist {
            games: Vec::new(),
            ..playlist
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    entries: Mutex<Vec<(LogLevel, String, String)>>,
}

impl LogSink for RecordingSink {
    fn append(&self, level: LogLevel, source: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, source.to_string(), message.to_string()));
    }
}

fn host_with_sink(sink: Arc<dyn LogSink>) -> ExtensionHost {
    let stores = Arc::new(MemoryStores::default());
    let stores = HostStores::new(stores.clone(), stores);
    ExtensionHost::new("12.1.0", stores, sink)
}

fn host() -> ExtensionHost {
    host_with_sink(Arc::new(RecordingSink::default()))
}

#[tokio::test]
async fn game_crud_round_trip() {
    let host = host();
    let api = host.api_for("curator-tools");
    let games = api.games();

    let mut game = Game::new("Motherload", "Flash", "arcade");
    game.developer = "XGen Studios".to_string();
    game.add_apps.push(AdditionalApp::new(
        &game.id,
        "Manual",
        "viewer.exe",
        "--manual",
    ));

    games.update_game(&game).await.unwrap();
    assert_eq!(games.count_games().await.unwrap(), 1);

    let found = games.find_game(&game.id).await.unwrap().unwrap();
    assert_eq!(found.developer, "XGen Studios");
    assert_eq!(found.add_apps.len(), 1);

    let removed = games.remove_game_and_add_apps(&game.id).await.unwrap().unwrap();
    assert_eq!(removed.add_apps.len(), 1);
    assert_eq!(games.count_games().await.unwrap(), 0);
    assert!(games.find_game(&game.id).await.unwrap().is_none());
}

#[tokio::test]
async fn placeholder_games_never_reach_the_store() {
    let host = host();
    let games = host.api_for("curator-tools");
    let games = games.games();

    let placeholder = Game::new_placeholder("Missing Entry");
    assert!(games.update_game(&placeholder).await.is_err());
    assert_eq!(games.count_games().await.unwrap(), 0);
}

#[tokio::test]
async fn platforms_are_distinct_per_library() {
    let host = host();
    let games = host.api_for("curator-tools");
    let games = games.games();

    for (title, platform, library) in [
        ("A", "Flash", "arcade"),
        ("B", "Flash", "arcade"),
        ("C", "HTML5", "arcade"),
        ("D", "Shockwave", "theatre"),
    ] {
        games
            .update_game(&Game::new(title, platform, library))
            .await
            .unwrap();
    }

    assert_eq!(
        games.find_platforms("arcade").await.unwrap(),
        vec!["Flash", "HTML5"]
    );
    assert_eq!(
        games.find_platforms("theatre").await.unwrap(),
        vec!["Shockwave"]
    );
}

#[tokio::test]
async fn tag_search_finds_tagged_games() {
    let host = host();
    let games = host.api_for("curator-tools");
    let games = games.games();

    let mut action = Tag::new("action");
    action.id = Some(1);

    let mut tagged = Game::new("Raze", "Flash", "arcade");
    tagged.tags.push(action.clone());
    games.update_game(&tagged).await.unwrap();
    games
        .update_game(&Game::new("Untagged", "Flash", "arcade"))
        .await
        .unwrap();

    let hits = games.find_games_with_tag(&action).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Raze");
}

#[tokio::test]
async fn playlist_round_trip_with_join_control() {
    let host = host();
    let api = host.api_for("curator-tools");
    let games = api.games();

    let game = Game::new("Motherload", "Flash", "arcade");
    games.update_game(&game).await.unwrap();

    let mut playlist = Playlist::new("Hidden Gems", "arcade");
    playlist.author = "curator".to_string();
    playlist.games.push(PlaylistGame::new(&playlist.id, &game.id, 0));
    games.update_playlist(&playlist).await.unwrap();

    let joined = games
        .find_playlist_by_name("Hidden Gems", true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(joined.games.len(), 1);

    let bare = games.find_playlist(&playlist.id, false).await.unwrap().unwrap();
    assert!(bare.games.is_empty());

    let all = games.find_playlists().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].author, "curator");
}

#[tokio::test]
async fn playlist_entries_update_and_remove() {
    let host = host();
    let api = host.api_for("curator-tools");
    let games = api.games();

    let playlist = Playlist::new("Rotation", "arcade");
    games.update_playlist(&playlist).await.unwrap();

    let mut entry = PlaylistGame::new(&playlist.id, "game-1", 0);
    entry.notes = "start here".to_string();
    games.update_playlist_game(&entry).await.unwrap();

    let found = games
        .find_playlist_game(&playlist.id, "game-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.notes, "start here");

    // Reordering the same entry replaces it instead of duplicating.
    entry.order = 3;
    games.update_playlist_game(&entry).await.unwrap();
    let joined = games.find_playlist(&playlist.id, true).await.unwrap().unwrap();
    assert_eq!(joined.games.len(), 1);
    assert_eq!(joined.games[0].order, 3);

    let removed = games
        .remove_playlist_game(&playlist.id, "game-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(removed.order, 3);
    assert!(games
        .find_playlist_game(&playlist.id, "game-1")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn launch_events_stop_after_deactivation() {
    let host = host();
    let api = host.api_for("curator-tools");

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = api.games().on_did_launch_game().subscribe(move |game: &Game| {
        sink.lock().unwrap().push(game.title.clone());
    });
    api.context.track(subscription).unwrap();

    host.games()
        .notify_game_launched(&Game::new("Raze", "Flash", "arcade"));

    // Host deactivates the extension; its subscription goes with it.
    api.context.subscriptions.dispose();
    host.games()
        .notify_game_launched(&Game::new("Unseen", "Flash", "arcade"));

    assert_eq!(*seen.lock().unwrap(), vec!["Raze"]);
}

#[tokio::test]
async fn commands_are_shared_and_die_with_their_extension() {
    let host = host();
    let provider = host.api_for("provider");
    let consumer = host.api_for("consumer");

    provider
        .register_command("provider.double", |args| {
            let n = args.first().and_then(serde_json::Value::as_i64).unwrap_or(0);
            Ok(json!(n * 2))
        })
        .unwrap();

    assert_eq!(
        consumer.commands().run("provider.double", &[json!(21)]).unwrap(),
        json!(42)
    );

    provider.context.subscriptions.dispose();
    assert!(consumer.commands().run("provider.double", &[]).is_err());
}

#[test]
fn logs_carry_the_extension_name() {
    let sink = Arc::new(RecordingSink::default());
    let host = host_with_sink(Arc::clone(&sink) as Arc<dyn LogSink>);

    let api = host.api_for("curator-tools");
    api.log.info("activated");
    api.log.warn("low disk space");

    let entries = sink.entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1, "curator-tools");
    assert_eq!(entries[0].0, LogLevel::Info);
    assert_eq!(entries[1].2, "low disk space");
}

#[test]
fn status_is_shared_across_extensions() {
    let host = host();
    let writer = host.api_for("writer");
    let reader = host.api_for("reader");

    writer
        .status()
        .set_status(StatusField::DevConsoleText, "rebuilding search index");
    assert_eq!(reader.status().dev_console_text(), "rebuilding search index");
    assert_eq!(host.status().dev_console_text(), "rebuilding search index");
}

#[test]
fn tracing_sink_accepts_all_levels() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("marquee_ext=trace")
        .try_init();

    let sink = TracingSink::new();
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        sink.append(level, "curator-tools", "probe");
    }
}
