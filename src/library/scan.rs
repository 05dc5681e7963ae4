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

//! Music directory indexing.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for tag
//! extraction. Every accepted file becomes one [`Track`] whose paths are
//! relative to the site root, so the player can fetch them as URLs.
//!
//! # Track identity
//!
//! A track id is the 128-bit `xxh3` hash of its relative path, written as
//! lowercase hex. Ids are stable for as long as a file does not move.

use std::path::{Component, Path};

use anyhow::{Context, Result, bail};
use lofty::prelude::*;
use lofty::probe::Probe;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use xxhash_rust::xxh3::xxh3_128;

use crate::{
    config::AppConfig,
    model::{Playlist, PlaylistKind, Track},
};

const LOCAL_SOURCE: &str = "local";
const LYRIC_EXTENSION: &str = "lrc";
const PIC_EXTENSION: &str = "jpg";

/// Recursively scans the configured music directory below `root`.
///
/// Files are visited in file name order so repeated scans of an unchanged
/// directory produce identical output. Files whose extension is not in
/// [`AppConfig::extensions`] are ignored.
///
/// # Arguments
///
/// * `root` - The site root; track paths are made relative to it.
/// * `config` - Supplies the music directory, extensions and playlist
///   metadata.
///
/// # Errors
///
/// Returns an error if the music directory does not exist.
pub fn scan_library(root: &Path, config: &AppConfig) -> Result<Playlist> {
    let music_dir = root.join(&config.music_dir);
    if !music_dir.is_dir() {
        bail!("Music directory {} does not exist", music_dir.display());
    }

    let library = &config.library;
    // Keyed the same way a loaded library file at position 0 would be.
    let mut playlist = Playlist::new(PlaylistKind::custom(0, &library.id), &library.name);
    playlist.id = library.id.clone();
    playlist.cover = library.cover.clone();
    playlist.creator_name = library.creator_name.clone();
    playlist.creator_avatar = library.creator_avatar.clone();

    for entry in WalkDir::new(&music_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), &config.extensions) {
            continue;
        }

        match scan_track(root, entry.path()) {
            Ok(track) => playlist.items.push(track),
            Err(e) => warn!("Skipping {}: {:#}", entry.path().display(), e),
        }
    }

    info!(dir = %music_dir.display(), tracks = playlist.items.len(), "Library scanned");

    Ok(playlist)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn scan_track(root: &Path, path: &Path) -> Result<Track> {
    let url = relative_url(root, path)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("File name contains invalid UTF-8")?
        .to_string();

    let lyric = sibling_url(root, path, LYRIC_EXTENSION)?;
    let pic = sibling_url(root, path, PIC_EXTENSION)?;
    let (artist, album) = read_tags(path);
    let id = track_id(&url);

    Ok(Track {
        url_id: id_if_set(&url, &id),
        pic_id: id_if_set(&pic, &id),
        lyric_id: id_if_set(&lyric, &id),
        id,
        name,
        artist,
        album,
        source: LOCAL_SOURCE.to_string(),
        pic,
        url,
        lyric,
    })
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
fn relative_url(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?;

    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .context("Path contains invalid UTF-8")?;

    Ok(parts.join("/"))
}

/// The url of a file next to `path` with the same stem, if it exists.
fn sibling_url(root: &Path, path: &Path, extension: &str) -> Result<String> {
    let sibling = path.with_extension(extension);
    if sibling.is_file() {
        relative_url(root, &sibling)
    } else {
        Ok(String::new())
    }
}

/// Artist and album from the file's tags, empty when unavailable.
fn read_tags(path: &Path) -> (String, String) {
    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            debug!("No readable tags in {}: {}", path.display(), e);
            return (String::new(), String::new());
        }
    };

    match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        Some(tag) => (
            tag.artist().map(|a| a.to_string()).unwrap_or_default(),
            tag.album().map(|a| a.to_string()).unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    }
}

/// The id the generator assigns to the file at `url`.
pub fn track_id(url: &str) -> String {
    format!("{:032x}", xxh3_128(url.as_bytes()))
}

fn id_if_set(value: &str, id: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        id.to_string()
    }
}
