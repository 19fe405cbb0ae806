//! Rendering of fetched tracks.
//!
//! Tracks are first flattened into [`TrackRecord`]s. Missing data never
//! fails rendering, it is replaced by a placeholder instead:
//!
//! - an unavailable track (null in the playlist) becomes [`UNKNOWN_TRACK`]
//! - a track with an empty or null name becomes [`UNKNOWN_TRACK`]
//! - a track without artists (or a nameless first artist) gets [`UNKNOWN_ARTIST`]
//! - a track without album (or album name) gets [`UNKNOWN_ALBUM`]
//!
//! Only the first artist of a track is rendered.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tabled::Table;

use crate::{
    error::{Error, Result},
    types::{Track, TrackRecord},
    utils,
};

pub const UNKNOWN_TRACK: &str = "Unknown track";
pub const UNKNOWN_ARTIST: &str = "Unknown artist";
pub const UNKNOWN_ALBUM: &str = "Unknown album";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Print numbered lines to stdout
    #[default]
    Console,
    /// Print a table to stdout
    Table,
    /// Write numbered lines to a text file
    Text,
    /// Write a JSON array to a file
    Json,
    /// Write a CSV file
    Csv,
}

impl OutputFormat {
    pub fn writes_file(&self) -> bool {
        self.extension().is_some()
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Console | OutputFormat::Table => None,
            OutputFormat::Text => Some("txt"),
            OutputFormat::Json => Some("json"),
            OutputFormat::Csv => Some("csv"),
        }
    }
}

/// Rejects an explicit output path for formats that never write a file.
pub fn check_output(format: OutputFormat, path: Option<&Path>) -> Result<()> {
    if path.is_none() || format.writes_file() {
        return Ok(());
    }
    let name = format
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| format!("{:?}", format));
    Err(Error::OutputNotSupported(name))
}

impl TrackRecord {
    pub fn from_track(position: usize, track: Option<&Track>) -> Self {
        let Some(track) = track else {
            return Self {
                position,
                name: UNKNOWN_TRACK.to_string(),
                artist: UNKNOWN_ARTIST.to_string(),
                album: UNKNOWN_ALBUM.to_string(),
            };
        };

        let artist = track.artists.first().map(|a| a.name.as_str());
        let album = track.album.as_ref().map(|a| a.name.as_str());

        Self {
            position,
            name: or_placeholder(Some(track.name.as_str()), UNKNOWN_TRACK),
            artist: or_placeholder(artist, UNKNOWN_ARTIST),
            album: or_placeholder(album, UNKNOWN_ALBUM),
        }
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Flattens tracks into 1-based numbered records.
pub fn to_records<'a, I>(tracks: I) -> Vec<TrackRecord>
where
    I: IntoIterator<Item = Option<&'a Track>>,
{
    tracks
        .into_iter()
        .enumerate()
        .map(|(i, track)| TrackRecord::from_track(i + 1, track))
        .collect()
}

pub fn render(records: &[TrackRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console | OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Table => Ok(Table::new(records).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => render_csv(records),
    }
}

pub fn render_text(records: &[TrackRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}. {} - {} ({})\n", r.position, r.name, r.artist, r.album))
        .collect()
}

pub fn render_csv(records: &[TrackRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Default output file for a rendered collection, e.g. `My Mix.csv`.
pub fn default_path(name: &str, format: OutputFormat) -> PathBuf {
    let stem = utils::sanitize_filename(name);
    match format.extension() {
        Some(ext) => PathBuf::from(format!("{}.{}", stem, ext)),
        None => PathBuf::from(stem),
    }
}

pub async fn write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, content).await?;
    Ok(())
}
