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

//! Music library generation.
//!
//! The player's custom playlist is filled from a generated `music_list.json`.
//! This module builds that playlist from the files in a music directory and
//! writes it in the same wire shape the catalog loader reads.

pub mod scan;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{model::Playlist, util::format::to_json_pretty};

/// Writes a library playlist as a one-element JSON array.
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns an error if the directories cannot be created or the file cannot
/// be written.
pub fn write_library(path: &Path, playlist: &Playlist) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = to_json_pretty(std::slice::from_ref(playlist))
        .context("Failed to serialize library")?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), tracks = playlist.items.len(), "Library written");

    Ok(())
}
