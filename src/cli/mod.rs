//! # CLI Module
//!
//! This module provides the command-line layer of spotracks. Each command
//! resolves its input, authenticates with Spotify, fetches the tracks and hands
//! the flattened records to the output module.
//!
//! ## Commands
//!
//! - [`playlist`] - Exports all tracks of a playlist given as URI, URL or ID
//! - [`tracks`] - Exports the tracks listed in a text file of track URLs
//!
//! ## Data Flow
//!
//! ```text
//! source → utils (resolve IDs)
//!        → auth (credentials → token)
//!        → spotify (pages / single tracks)
//!        → output (records → console or file)
//! ```
//!
//! Every failure on this path is fatal: commands report it with `error!` and
//! exit with status 1. Nothing is written when a fetch fails half way.
//!
//! ## Usage
//!
//! ```bash
//! spotracks playlist spotify:playlist:37i9dQZF1DXcBWIGoYBM5M
//! spotracks playlist https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M --format csv
//! spotracks tracks my-tracks.txt --format json --output export/tracks.json
//! ```

mod auth;
mod playlist;
mod tracks;

use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    output::{self, OutputFormat},
    success,
    types::TrackRecord,
};

pub use playlist::playlist;
pub use tracks::tracks;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Renders the records and either prints them or writes them to `path`.
async fn emit(records: &[TrackRecord], format: OutputFormat, path: Option<PathBuf>) {
    let content = match output::render(records, format) {
        Ok(content) => content,
        Err(e) => error!("Failed to render tracks. Err: {}", e),
    };

    match path {
        Some(path) if format.writes_file() => {
            if let Err(e) = output::write(&path, &content).await {
                error!("Failed to write {}. Err: {}", path.display(), e);
            }
            success!("Saved {} tracks to {}", records.len(), path.display());
        }
        _ => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
}
