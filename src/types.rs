use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Option<TrackItem>>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

/// Playlist entry; the track sits one level deeper and may be null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub track: Option<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub artists: Vec<TrackArtist>,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// Track data is passed through unvalidated: a null field decodes like a
// missing one and rendering substitutes placeholders.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn skip_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct TrackRecord {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
}
