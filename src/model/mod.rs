// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models for the playlist catalog.
//!
//! This module defines the central entities consumed by the player: playlists
//! and the tracks they hold. Field names serialize to the camelCase wire names
//! of the catalog payload, so a loaded catalog can be written back in the same
//! shape it was read from.

pub mod catalog;

use std::fmt;

use serde::Serialize;

use crate::error::NotFound;

/// Number of leading playlists the player reserves for its own use.
pub const RESERVED_SLOTS: usize = 3;

/// Typed identity of a playlist.
///
/// The reserved kinds are assigned by the loader from the first three
/// positions of the payload. Everything else is [`PlaylistKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaylistKind {
    SearchResults,
    NowPlaying,
    History,
    Custom(CustomId),
}

/// Key of a custom playlist.
///
/// Playlists without an `id` field are keyed by their position. The two
/// variants never compare equal, so a position can not shadow an explicit id
/// that happens to look like a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CustomId {
    Id(String),
    Position(usize),
}

impl PlaylistKind {
    /// The kind of the playlist found at `position` in a catalog payload.
    ///
    /// Custom playlists are keyed by their `id` field, falling back to their
    /// position when the field is empty.
    pub fn for_position(position: usize, id: &str) -> Self {
        match position {
            0 => PlaylistKind::SearchResults,
            1 => PlaylistKind::NowPlaying,
            2 => PlaylistKind::History,
            _ => PlaylistKind::custom(position, id),
        }
    }

    pub fn custom(position: usize, id: &str) -> Self {
        if id.is_empty() {
            PlaylistKind::Custom(CustomId::Position(position))
        } else {
            PlaylistKind::with_id(id)
        }
    }

    /// A custom kind keyed by an explicit playlist id.
    pub fn with_id(id: impl Into<String>) -> Self {
        PlaylistKind::Custom(CustomId::Id(id.into()))
    }

    pub fn is_reserved(&self) -> bool {
        !matches!(self, PlaylistKind::Custom(_))
    }
}

impl fmt::Display for PlaylistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistKind::SearchResults => write!(f, "search results"),
            PlaylistKind::NowPlaying => write!(f, "now playing"),
            PlaylistKind::History => write!(f, "play history"),
            PlaylistKind::Custom(CustomId::Id(id)) => write!(f, "custom playlist {}", id),
            PlaylistKind::Custom(CustomId::Position(position)) => {
                write!(f, "custom playlist #{}", position)
            }
        }
    }
}

/// A single playable entry.
///
/// Every optional field is normalized to the empty string when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub source: String,
    pub url_id: String,
    pub pic_id: String,
    pub lyric_id: String,
    pub pic: String,
    pub url: String,
    pub lyric: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(skip)]
    pub kind: PlaylistKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub cover: String,
    pub creator_name: String,
    pub creator_avatar: String,
    pub items: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist of the given kind.
    pub fn new(kind: PlaylistKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: String::default(),
            name: name.into(),
            cover: String::default(),
            creator_name: String::default(),
            creator_avatar: String::default(),
            items: vec![],
        }
    }

    /// Create one of the player's reserved playlists with its default label.
    ///
    /// Returns `None` for [`PlaylistKind::Custom`].
    pub fn reserved(kind: PlaylistKind) -> Option<Self> {
        let (name, cover) = match kind {
            PlaylistKind::SearchResults => ("Search Results", ""),
            PlaylistKind::NowPlaying => ("Now Playing", ""),
            PlaylistKind::History => ("Play History", "images/history.png"),
            PlaylistKind::Custom(_) => return None,
        };

        let mut playlist = Self::new(kind, name);
        playlist.cover = cover.to_string();
        Some(playlist)
    }

    /// Finds the first track with the given id.
    ///
    /// Track ids are only unique within one playlist, so this never looks
    /// beyond `self`.
    pub fn find_track_by_id(&self, id: &str) -> Result<&Track, NotFound> {
        self.items
            .iter()
            .find(|track| track.id == id)
            .ok_or_else(|| NotFound::Track(id.to_string()))
    }

    /// Track ids in play order.
    pub fn track_ids(&self) -> Vec<&str> {
        self.items.iter().map(|track| track.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, name: &str) -> Track {
        Track {
            id: id.to_string(),
            name: name.to_string(),
            ..Track::default()
        }
    }

    #[test]
    fn kinds_follow_position() {
        assert_eq!(PlaylistKind::for_position(0, "x"), PlaylistKind::SearchResults);
        assert_eq!(PlaylistKind::for_position(1, ""), PlaylistKind::NowPlaying);
        assert_eq!(PlaylistKind::for_position(2, ""), PlaylistKind::History);
        assert_eq!(PlaylistKind::for_position(3, "9527"), PlaylistKind::with_id("9527"));
        assert_eq!(
            PlaylistKind::for_position(5, ""),
            PlaylistKind::Custom(CustomId::Position(5))
        );
    }

    #[test]
    fn positional_key_differs_from_numeric_id() {
        assert_ne!(PlaylistKind::for_position(3, ""), PlaylistKind::with_id("3"));
        assert_eq!(PlaylistKind::for_position(3, "").to_string(), "custom playlist #3");
        assert_eq!(PlaylistKind::with_id("3").to_string(), "custom playlist 3");
    }

    #[test]
    fn find_track_returns_first_match() {
        let mut playlist = Playlist::new(PlaylistKind::with_id("a"), "Mix");
        playlist.items = vec![track("1", "first"), track("2", "second"), track("1", "dupe")];

        assert_eq!(playlist.find_track_by_id("1").unwrap().name, "first");
        assert_eq!(playlist.find_track_by_id("2").unwrap().name, "second");
        assert_eq!(
            playlist.find_track_by_id("9"),
            Err(NotFound::Track("9".into()))
        );
    }

    #[test]
    fn reserved_playlists_have_labels() {
        let history = Playlist::reserved(PlaylistKind::History).unwrap();
        assert_eq!(history.name, "Play History");
        assert_eq!(history.cover, "images/history.png");
        assert!(history.kind.is_reserved());
        assert!(Playlist::reserved(PlaylistKind::with_id("1")).is_none());
    }

    #[test]
    fn serializes_wire_names() {
        let mut playlist = Playlist::new(PlaylistKind::with_id("7"), "Mix");
        playlist.id = "7".into();
        playlist.items.push(Track {
            url_id: "42".into(),
            ..track("1", "Song")
        });

        let value = serde_json::to_value(&playlist).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["creatorName"], "");
        assert_eq!(value["items"][0]["urlId"], "42");
        assert!(value.get("kind").is_none());
        assert_eq!(value["items"][0]["lyric"], "");
    }
}
