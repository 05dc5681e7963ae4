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

//! The playlist catalog.
//!
//! A [`Catalog`] is the ordered collection of playlists the player starts
//! with. It is an owned value: the player holds it and hands out borrows,
//! and reserved playlists are reached by [`PlaylistKind`] rather than by
//! their position.

use serde::Serialize;

use crate::{
    error::NotFound,
    loader::LoadWarning,
    model::{Playlist, PlaylistKind},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    playlists: Vec<Playlist>,
    #[serde(skip)]
    warnings: Vec<LoadWarning>,
}

impl Catalog {
    pub(crate) fn from_parts(playlists: Vec<Playlist>, warnings: Vec<LoadWarning>) -> Self {
        Self {
            playlists,
            warnings,
        }
    }

    /// A catalog holding only the three reserved playlists, empty.
    pub fn with_reserved() -> Self {
        let playlists = [
            PlaylistKind::SearchResults,
            PlaylistKind::NowPlaying,
            PlaylistKind::History,
        ]
        .into_iter()
        .filter_map(Playlist::reserved)
        .collect();

        Self::from_parts(playlists, vec![])
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Non-fatal observations recorded while loading.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn find_playlist_by_index(&self, index: usize) -> Result<&Playlist, NotFound> {
        self.playlists.get(index).ok_or(NotFound::Playlist(index))
    }

    pub fn find_playlist_by_kind(&self, kind: &PlaylistKind) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.kind == kind)
    }

    /// Mutable access for the player, e.g. to rebuild "now playing".
    pub fn find_playlist_by_kind_mut(&mut self, kind: &PlaylistKind) -> Option<&mut Playlist> {
        self.playlists.iter_mut().find(|p| &p.kind == kind)
    }

    /// Finds a custom playlist by its `id` field.
    pub fn find_playlist_by_id(&self, id: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|p| !p.kind.is_reserved() && !p.id.is_empty() && p.id == id)
    }

    /// Merges a scanned library playlist into the catalog.
    ///
    /// If a custom playlist with the same non-empty `id` exists its tracks are
    /// replaced, keeping its own name and cover. Otherwise the library is
    /// appended as a new custom playlist, keyed by its position when it has
    /// no id.
    pub fn merge_library(&mut self, mut library: Playlist) {
        if !library.id.is_empty() {
            let existing = self
                .playlists
                .iter_mut()
                .find(|p| !p.kind.is_reserved() && p.id == library.id);

            if let Some(existing) = existing {
                existing.items = library.items;
                return;
            }
        }

        // Playlists are never removed, so the new index is unused by any
        // positional key.
        library.kind = PlaylistKind::custom(self.playlists.len(), &library.id);
        self.playlists.push(library);
    }

    /// The catalog in its wire shape, a plain array of playlists.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
