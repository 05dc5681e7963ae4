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

//! # musiclist
//!
//! Command line front end for the playlist catalog.
//!
//! * `check` validates a catalog file, optionally merging a generated library
//!   into it, and reports warnings.
//! * `list` and `find` browse a validated catalog.
//! * `generate` scans the music directory and writes the library file.
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use musiclist::{
    Catalog,
    config::{self, AppConfig},
    library::{self, scan},
    loader,
    util::format::to_json_pretty,
};

#[derive(Parser)]
#[command(name = "musiclist")]
#[command(about = "Validate playlist catalogs and generate music library files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Check {
        /// Catalog JSON file
        file: PathBuf,
        /// Generated library file to merge into the catalog
        #[arg(short, long)]
        library: Option<PathBuf>,
    },
    /// List playlists, or the tracks of one playlist
    List {
        /// Catalog JSON file
        file: PathBuf,
        /// Playlist index
        #[arg(short, long)]
        playlist: Option<usize>,
    },
    /// Show one track of a playlist
    Find {
        /// Catalog JSON file
        file: PathBuf,
        /// Playlist index
        index: usize,
        /// Track id
        id: String,
    },
    /// Scan the music directory and write the library file
    Generate {
        /// Site root the music directory and track urls are relative to
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
        /// Output file, defaults to the configured one below the root
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the configuration file location and values
    Config,
}

/// The entry point of the application.
///
/// Installs the log subscriber, loads the configuration and dispatches the
/// requested subcommand. Any error is reported by `anyhow` and turns into a
/// non-zero exit status.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "musiclist=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = config::load_config();

    match cli.command {
        Commands::Check { file, library } => check(&file, library.as_deref()),
        Commands::List { file, playlist } => list(&file, playlist),
        Commands::Find { file, index, id } => find(&file, index, &id),
        Commands::Generate { root, output } => generate(&config, &root, output),
        Commands::Config => show_config(&config),
    }
}

fn open_catalog(file: &Path) -> Result<Catalog> {
    loader::load_catalog_file(file)
        .with_context(|| format!("Invalid playlist configuration in {}", file.display()))
}

/// Loads and validates a catalog, printing one line per playlist.
///
/// # Errors
///
/// Returns an error if the catalog or the library fails to load.
fn check(file: &Path, library: Option<&Path>) -> Result<()> {
    let mut catalog = open_catalog(file)?;

    if let Some(library) = library {
        let playlists = loader::load_library_file(library)
            .with_context(|| format!("Invalid library file {}", library.display()))?;
        for playlist in playlists {
            catalog.merge_library(playlist);
        }
    }

    for (index, playlist) in catalog.playlists().iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:<32} {} tracks",
            index,
            playlist.kind.to_string(),
            playlist.name,
            playlist.items.len()
        );
    }

    for warning in catalog.warnings() {
        println!("warning: {}", warning);
    }

    println!("{}: OK", file.display());

    Ok(())
}

fn list(file: &Path, playlist: Option<usize>) -> Result<()> {
    let catalog = open_catalog(file)?;

    match playlist {
        Some(index) => {
            let playlist = catalog.find_playlist_by_index(index)?;
            for track in &playlist.items {
                println!("{}  {} - {}  [{}]", track.id, track.artist, track.name, track.album);
            }
        }
        None => {
            for (index, playlist) in catalog.playlists().iter().enumerate() {
                println!("{:>3}  {} ({})", index, playlist.name, playlist.items.len());
            }
        }
    }

    Ok(())
}

fn find(file: &Path, index: usize, id: &str) -> Result<()> {
    let catalog = open_catalog(file)?;
    let track = catalog.find_playlist_by_index(index)?.find_track_by_id(id)?;

    println!("{}", to_json_pretty(track)?);

    Ok(())
}

/// Scans the music directory and writes the library file.
///
/// # Errors
///
/// Returns an error if the music directory is missing or the output cannot
/// be written.
fn generate(config: &AppConfig, root: &Path, output: Option<PathBuf>) -> Result<()> {
    let playlist = scan::scan_library(root, config).context("Failed to scan music library")?;
    let output = output.unwrap_or_else(|| root.join(&config.output_file));

    library::write_library(&output, &playlist)?;

    println!("{} tracks written to {}", playlist.items.len(), output.display());

    Ok(())
}

fn show_config(config: &AppConfig) -> Result<()> {
    let path = config::config_path().context("Failed to locate configuration file")?;

    println!("# {}", path.display());
    println!("{}", to_json_pretty(config)?);

    Ok(())
}
