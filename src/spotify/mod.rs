//! # Spotify Integration Module
//!
//! This module is the client layer between spotracks and the Spotify Web API.
//! It obtains an application token through the client-credentials flow and
//! retrieves track metadata, either page by page for a playlist or one track
//! at a time for a track list.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (playlist, tracks)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Playlist Operations (paginated collection)
//!     └── Track Operations (single track lookups)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Request Model
//!
//! Every request is awaited before the next one is sent. The access token is
//! never stored by [`Spotify`]; callers obtain it once with
//! [`Spotify::obtain_token`] and pass it into every call. There are no retries
//! and no rate-limit handling: any failed request fails the whole operation.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - Playlist items, following `next` links
//! - `GET /playlists/{id}?fields=name` - Playlist name
//! - `GET /tracks/{id}` - Single track
//!
//! ## Usage
//!
//! ```rust
//! let spotify = Spotify::new(ApiConfig::from_env());
//! let token = spotify.obtain_token(&Credentials::from_env()?).await?;
//! let tracks = spotify.collect_tracks("37i9dQZF1DXcBWIGoYBM5M", &token.access_token).await?;
//! ```

pub mod auth;
pub mod playlist;
pub mod tracks;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::ApiConfig,
    error::{Error, Result},
};

/// Spotify Web API client.
///
/// Holds one HTTP connection pool and the endpoint configuration for the
/// lifetime of a run.
#[derive(Debug, Clone)]
pub struct Spotify {
    http: Client,
    config: ApiConfig,
}

impl Spotify {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Sends an authorized `GET` and decodes the JSON body.
    ///
    /// Non-success statuses become [`Error::Status`] carrying the response
    /// body, undecodable bodies become [`Error::Parse`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T> {
        let response = self.http.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
