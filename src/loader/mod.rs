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

//! Catalog loading and validation.
//!
//! This module turns raw configuration data, already deserialized into a
//! [`serde_json::Value`], into a typed [`Catalog`].
//!
//! # Validation
//!
//! * The payload must be an array of playlist objects.
//! * Each playlist must carry `name`; `items`, when present, must be an array.
//! * Each track must be an object carrying `id` and `name`.
//! * Unknown fields are ignored. Absent or `null` optional fields become empty
//!   strings.
//!
//! Loading is all-or-nothing. The first error aborts the load and no catalog
//! is returned. Oddities that do not make the catalog unusable are collected
//! as [`LoadWarning`]s and logged once the load succeeds.

mod fields;

use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::Path,
};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    error::{FieldPath, LoadError},
    model::{Playlist, PlaylistKind, RESERVED_SLOTS, Track, catalog::Catalog},
};

/// Non-fatal observation made while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A reserved playlist already holds tracks in the payload.
    ReservedSlotNotEmpty { kind: PlaylistKind, tracks: usize },
    /// Two tracks in the same playlist share an id.
    DuplicateTrackId { playlist: usize, id: String },
    /// Two custom playlists share an id; lookups resolve to the first.
    DuplicatePlaylistId { first: usize, second: usize, id: String },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::ReservedSlotNotEmpty { kind, tracks } => {
                write!(f, "reserved playlist '{}' is not empty ({} tracks)", kind, tracks)
            }
            LoadWarning::DuplicateTrackId { playlist, id } => {
                write!(f, "playlist {} contains track id `{}` more than once", playlist, id)
            }
            LoadWarning::DuplicatePlaylistId { first, second, id } => {
                write!(f, "playlists {} and {} share the id `{}`", first, second, id)
            }
        }
    }
}

/// Loads a player catalog.
///
/// The first three playlists become the reserved search results, now playing
/// and play history playlists. A payload with fewer than three entries is
/// still accepted.
///
/// # Errors
///
/// Returns a [`LoadError`] identifying the offending position if the payload
/// is not an array, a playlist or track is not an object, a required field is
/// missing, or a field holds the wrong type.
pub fn load_catalog(raw: &Value) -> Result<Catalog, LoadError> {
    load_with_reserved(raw, RESERVED_SLOTS)
}

/// Parses JSON text and loads it with [`load_catalog`].
pub fn load_catalog_str(text: &str) -> Result<Catalog, LoadError> {
    let raw: Value = serde_json::from_str(text)?;
    load_catalog(&raw)
}

/// Reads a JSON catalog file and loads it with [`load_catalog`].
pub fn load_catalog_file(path: &Path) -> Result<Catalog, LoadError> {
    let text = read_file(path)?;
    load_catalog_str(&text)
}

/// Loads a library payload such as a generated `music_list.json`.
///
/// Validation is the same as [`load_catalog`], but no position is reserved:
/// every playlist is custom.
pub fn load_library(raw: &Value) -> Result<Vec<Playlist>, LoadError> {
    let catalog = load_with_reserved(raw, 0)?;
    Ok(catalog.playlists().to_vec())
}

/// Reads a JSON library file and loads it with [`load_library`].
pub fn load_library_file(path: &Path) -> Result<Vec<Playlist>, LoadError> {
    let text = read_file(path)?;
    let raw: Value = serde_json::from_str(&text)?;
    load_library(&raw)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_with_reserved(raw: &Value, reserved: usize) -> Result<Catalog, LoadError> {
    let entries = raw.as_array().ok_or(LoadError::Structural {
        path: FieldPath::Root,
        expected: "an array of playlists",
    })?;

    let mut warnings = Vec::new();
    let mut playlists = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let kind_of = |id: &str| {
            if index < reserved {
                PlaylistKind::for_position(index, id)
            } else {
                PlaylistKind::custom(index, id)
            }
        };
        playlists.push(load_playlist(index, entry, kind_of, &mut warnings)?);
    }

    let mut seen = HashMap::new();
    for (index, playlist) in playlists.iter().enumerate() {
        if playlist.kind.is_reserved() || playlist.id.is_empty() {
            continue;
        }
        if let Some(&first) = seen.get(playlist.id.as_str()) {
            warnings.push(LoadWarning::DuplicatePlaylistId {
                first,
                second: index,
                id: playlist.id.clone(),
            });
        } else {
            seen.insert(playlist.id.as_str(), index);
        }
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    debug!(
        playlists = playlists.len(),
        tracks = playlists.iter().map(|p| p.items.len()).sum::<usize>(),
        "Catalog loaded"
    );

    Ok(Catalog::from_parts(playlists, warnings))
}

fn load_playlist(
    index: usize,
    value: &Value,
    kind_of: impl Fn(&str) -> PlaylistKind,
    warnings: &mut Vec<LoadWarning>,
) -> Result<Playlist, LoadError> {
    let path = FieldPath::Playlist(index);
    let record = as_record(value, path, "a playlist object")?;

    let id = fields::PLAYLIST_ID.optional(record, path)?;
    let name = fields::NAME.required(record, path)?;
    let cover = fields::COVER.optional(record, path)?;
    let creator_name = fields::CREATOR_NAME.optional(record, path)?;
    let creator_avatar = fields::CREATOR_AVATAR.optional(record, path)?;
    let kind = kind_of(&id);

    let items = match fields::ITEMS.get(record) {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(track, entry)| load_track(index, track, entry))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(LoadError::Structural {
                path: FieldPath::Items(index),
                expected: "an array of tracks",
            });
        }
    };

    if kind.is_reserved() && !items.is_empty() {
        warnings.push(LoadWarning::ReservedSlotNotEmpty {
            kind: kind.clone(),
            tracks: items.len(),
        });
    }

    let mut seen = HashSet::new();
    for track in &items {
        if !seen.insert(track.id.as_str()) {
            warnings.push(LoadWarning::DuplicateTrackId {
                playlist: index,
                id: track.id.clone(),
            });
        }
    }

    Ok(Playlist {
        kind,
        id,
        name,
        cover,
        creator_name,
        creator_avatar,
        items,
    })
}

fn load_track(playlist: usize, track: usize, value: &Value) -> Result<Track, LoadError> {
    let path = FieldPath::Track { playlist, track };
    let record = as_record(value, path, "a track object")?;

    Ok(Track {
        id: fields::TRACK_ID.required(record, path)?,
        name: fields::NAME.required(record, path)?,
        artist: fields::ARTIST.optional(record, path)?,
        album: fields::ALBUM.optional(record, path)?,
        source: fields::SOURCE.optional(record, path)?,
        url_id: fields::URL_ID.optional(record, path)?,
        pic_id: fields::PIC_ID.optional(record, path)?,
        lyric_id: fields::LYRIC_ID.optional(record, path)?,
        pic: fields::PIC.optional(record, path)?,
        url: fields::URL.optional(record, path)?,
        lyric: fields::LYRIC.optional(record, path)?,
    })
}

fn as_record<'a>(
    value: &'a Value,
    path: FieldPath,
    expected: &'static str,
) -> Result<&'a Map<String, Value>, LoadError> {
    value
        .as_object()
        .ok_or(LoadError::Structural { path, expected })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::CustomId;

    fn reserved() -> Vec<Value> {
        vec![
            json!({ "name": "Search Results", "cover": "", "item": [] }),
            json!({ "name": "Now Playing", "cover": "", "item": [] }),
            json!({ "name": "Play History", "cover": "images/history.png", "item": [] }),
        ]
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = load_catalog(&json!({ "name": "x" })).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Structural {
                path: FieldPath::Root,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_object_playlist() {
        let err = load_catalog(&json!([{ "name": "a" }, "b"])).unwrap_err();
        assert_eq!(err.path(), Some(FieldPath::Playlist(1)));
    }

    #[test]
    fn rejects_playlist_without_name() {
        let err = load_catalog(&json!([{ "cover": "" }])).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                path: FieldPath::Playlist(0),
                field: "name"
            }
        ));
    }

    #[test]
    fn null_name_counts_as_missing() {
        let err = load_catalog(&json!([{ "name": null }])).unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "name", .. }));
    }

    #[test]
    fn rejects_items_that_are_not_an_array() {
        let mut payload = reserved();
        payload.push(json!({ "name": "Mix", "items": { "id": "1" } }));

        let err = load_catalog(&Value::Array(payload)).unwrap_err();
        assert_eq!(err.path(), Some(FieldPath::Items(3)));
    }

    #[test]
    fn rejects_track_without_name() {
        let err = load_catalog(&json!([{ "name": "a", "items": [{ "id": "1" }] }])).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                path: FieldPath::Track {
                    playlist: 0,
                    track: 0
                },
                field: "name"
            }
        ));
    }

    #[test]
    fn rejects_wrongly_typed_field() {
        let err = load_catalog(&json!([{ "name": "a", "cover": 3 }])).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidField {
                field: "cover",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_object_track() {
        let mut payload = reserved();
        payload.push(json!({ "name": "Mix", "items": [{ "id": "1", "name": "a" }, "x"] }));

        let err = load_catalog(&Value::Array(payload)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Structural {
                path: FieldPath::Track {
                    playlist: 3,
                    track: 1
                },
                ..
            }
        ));
    }

    #[test]
    fn rejects_wrongly_typed_track_field() {
        let mut payload = reserved();
        payload.push(json!({ "name": "Mix", "items": [{ "id": "1", "name": "a", "artist": 5 }] }));

        let err = load_catalog(&Value::Array(payload)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidField {
                path: FieldPath::Track {
                    playlist: 3,
                    track: 0
                },
                field: "artist",
                ..
            }
        ));
    }

    #[test]
    fn null_items_fall_back_to_alias() {
        let catalog = load_catalog(&json!([
            { "name": "a", "items": null, "item": [{ "id": "1", "name": "x" }] }
        ]))
        .unwrap();

        assert_eq!(catalog.playlists()[0].track_ids(), vec!["1"]);
    }

    #[test]
    fn positional_key_does_not_shadow_numeric_id() {
        let mut payload = reserved();
        payload.push(json!({ "name": "Unnamed" }));
        payload.push(json!({ "id": "3", "name": "Explicit" }));

        let catalog = load_catalog(&Value::Array(payload)).unwrap();

        assert_eq!(
            catalog.find_playlist_by_kind(&PlaylistKind::with_id("3")).unwrap().name,
            "Explicit"
        );
        assert_eq!(
            catalog
                .find_playlist_by_kind(&PlaylistKind::Custom(CustomId::Position(3)))
                .unwrap()
                .name,
            "Unnamed"
        );
        assert!(catalog.warnings().is_empty());
    }

    #[test]
    fn duplicate_playlist_ids_warn() {
        let mut payload = reserved();
        payload.push(json!({ "id": "9527", "name": "First" }));
        payload.push(json!({ "id": "9527", "name": "Second" }));

        let catalog = load_catalog(&Value::Array(payload)).unwrap();

        assert_eq!(
            catalog.warnings(),
            &[LoadWarning::DuplicatePlaylistId {
                first: 3,
                second: 4,
                id: "9527".into()
            }]
        );
        assert_eq!(catalog.find_playlist_by_id("9527").unwrap().name, "First");
    }

    #[test]
    fn numeric_ids_become_text() {
        let catalog = load_catalog(&json!([
            { "name": "a", "items": [{ "id": 17, "name": "x", "url_id": 436514312 }] }
        ]))
        .unwrap();

        let track = &catalog.playlists()[0].items[0];
        assert_eq!(track.id, "17");
        assert_eq!(track.url_id, "436514312");
    }

    #[test]
    fn reserved_slot_with_tracks_warns() {
        let catalog = load_catalog(&json!([
            { "name": "Search Results", "items": [{ "id": "1", "name": "x" }] }
        ]))
        .unwrap();

        assert_eq!(
            catalog.warnings(),
            &[LoadWarning::ReservedSlotNotEmpty {
                kind: PlaylistKind::SearchResults,
                tracks: 1
            }]
        );
        assert_eq!(catalog.playlists()[0].items.len(), 1);
    }

    #[test]
    fn duplicate_track_ids_warn() {
        let mut payload = reserved();
        payload.push(json!({ "name": "Mix", "items": [
            { "id": "1", "name": "x" },
            { "id": "1", "name": "y" }
        ]}));

        let catalog = load_catalog(&Value::Array(payload)).unwrap();
        assert_eq!(
            catalog.warnings(),
            &[LoadWarning::DuplicateTrackId {
                playlist: 3,
                id: "1".into()
            }]
        );
    }

    #[test]
    fn library_payload_reserves_nothing() {
        let playlists = load_library(&json!([
            { "id": "9527", "name": "Custom List", "item": [{ "id": "1", "name": "x" }] }
        ]))
        .unwrap();

        assert_eq!(playlists[0].kind, PlaylistKind::with_id("9527"));
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(load_catalog_str("[{"), Err(LoadError::Parse(_))));
    }
}
