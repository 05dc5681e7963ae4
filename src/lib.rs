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

//! # Playlist catalog loading.
//!
//! A browser music player starts from a static table of playlists. The first
//! three entries are reserved for the player's search results, now playing
//! and play history lists; the rest are custom playlists, one of which is
//! filled from a generated music library file.
//!
//! This crate provides:
//!
//! * **Loading**: [`loader::load_catalog`] validates raw JSON data and
//!   produces a typed [`Catalog`], or fails as a whole with a
//!   [`LoadError`] naming the offending position.
//! * **Lookup**: playlists by index, kind or id, and tracks by id.
//! * **Generation**: [`library::scan::scan_library`] indexes a music
//!   directory into a playlist that [`library::write_library`] writes out.

pub mod config;
pub mod error;
pub mod library;
pub mod loader;
pub mod model;
pub mod util;

pub use error::{FieldPath, LoadError, NotFound};
pub use loader::{LoadWarning, load_catalog, load_catalog_file, load_catalog_str};
pub use model::{CustomId, Playlist, PlaylistKind, Track, catalog::Catalog};
