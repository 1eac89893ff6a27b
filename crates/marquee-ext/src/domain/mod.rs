//! Core domain types.
//!
//! These types mirror the launcher's catalog records as extensions see them,
//! independent of any storage concerns.
//!
//! # Structure
//!
//! - `game` - Game and additional-application types
//! - `tag` - Tag, alias, and category types
//! - `playlist` - Playlist and playlist-entry types
//!
//! All wire shapes serialize as camelCase JSON, matching the host's own
//! serialization of these records.

mod game;
mod playlist;
mod tag;

pub use game::{AdditionalApp, Game};
pub use playlist::{Playlist, PlaylistGame};
pub use tag::{Tag, TagAlias, TagCategory};
