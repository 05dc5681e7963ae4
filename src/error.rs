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

//! Error types for catalog loading and lookup.
//!
//! Loading fails atomically: any [`LoadError`] means no catalog was produced.
//! Each structural or field error carries a [`FieldPath`] identifying the
//! offending playlist and track by position in the input.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Position of a value inside the raw catalog payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    /// The top-level payload.
    Root,
    /// A playlist record, by index.
    Playlist(usize),
    /// The `items` sequence of a playlist.
    Items(usize),
    /// A track record inside a playlist's `items`.
    Track { playlist: usize, track: usize },
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Root => write!(f, "$"),
            FieldPath::Playlist(index) => write!(f, "$[{}]", index),
            FieldPath::Items(index) => write!(f, "$[{}].items", index),
            FieldPath::Track { playlist, track } => write!(f, "$[{}].items[{}]", playlist, track),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    /// A value has the wrong shape, e.g. the payload is not an array or a
    /// playlist entry is not an object.
    #[error("{path}: expected {expected}")]
    Structural {
        path: FieldPath,
        expected: &'static str,
    },

    /// A required field is absent or `null`.
    #[error("{path}: missing required field `{field}`")]
    MissingField { path: FieldPath, field: &'static str },

    /// A field is present but holds the wrong JSON type.
    #[error("{path}: field `{field}` must be {expected}")]
    InvalidField {
        path: FieldPath,
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LoadError {
    /// The position in the payload the error refers to, if any.
    pub fn path(&self) -> Option<FieldPath> {
        match self {
            LoadError::Structural { path, .. }
            | LoadError::MissingField { path, .. }
            | LoadError::InvalidField { path, .. } => Some(*path),
            LoadError::Parse(_) | LoadError::Io { .. } => None,
        }
    }
}

/// Lookup failure for playlists and tracks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    #[error("no playlist at index {0}")]
    Playlist(usize),

    #[error("no track with id `{0}`")]
    Track(String),
}
