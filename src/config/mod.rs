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

//! Application configuration.
//!
//! This module manages the configuration file used by the library generator.
//! Values missing from the file take their defaults, and a file that cannot be
//! read at all falls back to [`AppConfig::default`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_NAME: &str = "musiclist";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Directory scanned for music, relative to the site root.
    pub music_dir: String,
    /// Generated library file, relative to the site root.
    pub output_file: String,
    /// Accepted file extensions, compared case-insensitively.
    pub extensions: Vec<String>,
    pub library: LibraryConfig,
}

/// Metadata of the playlist the generator produces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LibraryConfig {
    pub id: String,
    pub name: String,
    pub cover: String,
    pub creator_name: String,
    pub creator_avatar: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            music_dir: "static".to_string(),
            output_file: "static/music_list.json".to_string(),
            extensions: vec!["mp3".to_string(), "wma".to_string()],
            library: LibraryConfig::default(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            id: "9527".to_string(),
            name: "Custom List".to_string(),
            cover: "/images/album.png".to_string(),
            creator_name: "EXP".to_string(),
            creator_avatar: "/images/avatar.jpg".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    })
}

pub fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}
