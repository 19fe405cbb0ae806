use crate::error::{Error, Result};

const OPEN_SPOTIFY_HOST: &str = "open.spotify.com/";

/// Kind of Spotify resource addressed by a URI or URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Playlist,
    Track,
}

impl ResourceKind {
    fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Playlist => "playlist",
            ResourceKind::Track => "track",
        }
    }
}

pub fn resolve_playlist_id(source: &str) -> Result<String> {
    resolve_id(source, ResourceKind::Playlist)
}

pub fn resolve_track_id(source: &str) -> Result<String> {
    resolve_id(source, ResourceKind::Track)
}

/// Extracts the ID from `spotify:<kind>:<id>`, an `open.spotify.com` URL or a
/// bare base-62 ID.
pub fn resolve_id(source: &str, kind: ResourceKind) -> Result<String> {
    let source = source.trim();
    let invalid = || Error::InvalidSource(source.to_string());

    let candidate = if let Some(rest) = source.strip_prefix("spotify:") {
        let (found_kind, id) = rest.split_once(':').ok_or_else(invalid)?;
        if found_kind != kind.as_str() {
            return Err(invalid());
        }
        id
    } else if let Some(index) = source.find(OPEN_SPOTIFY_HOST) {
        let scheme = &source[..index];
        if !matches!(scheme, "" | "http://" | "https://") {
            return Err(invalid());
        }

        let path = &source[index + OPEN_SPOTIFY_HOST.len()..];
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let mut segment = segments.next().ok_or_else(invalid)?;
        if segment.starts_with("intl-") {
            segment = segments.next().ok_or_else(invalid)?;
        }
        if segment != kind.as_str() {
            return Err(invalid());
        }
        segments.next().ok_or_else(invalid)?
    } else {
        source
    };

    if is_base62_id(candidate) {
        Ok(candidate.to_string())
    } else {
        Err(invalid())
    }
}

fn is_base62_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parses a file holding one track URL or URI per line into track IDs.
///
/// Blank lines are skipped. Any other line that is not a track reference is
/// reported with its 1-based line number.
pub fn parse_track_list(content: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // bare IDs are too ambiguous inside a file
        let is_reference = line.starts_with("spotify:") || line.contains(OPEN_SPOTIFY_HOST);
        let id = is_reference
            .then(|| resolve_track_id(line).ok())
            .flatten()
            .ok_or_else(|| Error::InvalidTrackList {
                line: index + 1,
                content: line.to_string(),
            })?;
        ids.push(id);
    }

    if ids.is_empty() {
        return Err(Error::InvalidTrackList {
            line: 0,
            content: "file contains no track URLs".to_string(),
        });
    }

    Ok(ids)
}

/// Turns a playlist name into something safe to use as a file name.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = replaced.trim().trim_end_matches('.').trim_end();
    if trimmed.is_empty() {
        "playlist".to_string()
    } else {
        trimmed.to_string()
    }
}
