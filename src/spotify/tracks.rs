use super::Spotify;
use crate::{error::Result, types::Track};

impl Spotify {
    /// Fetches a single track by its ID.
    pub async fn get_track(&self, track_id: &str, token: &str) -> Result<Track> {
        let url = format!(
            "{uri}/tracks/{id}",
            uri = self.config.api_url,
            id = track_id
        );
        self.get_json(&url, token).await
    }

    /// Fetches tracks one after another, keeping the order of `track_ids`.
    ///
    /// `on_track` is called with the number of tracks fetched so far. The
    /// first failing lookup aborts the whole operation.
    pub async fn get_tracks<F>(
        &self,
        track_ids: &[String],
        token: &str,
        mut on_track: F,
    ) -> Result<Vec<Track>>
    where
        F: FnMut(usize),
    {
        let mut tracks = Vec::with_capacity(track_ids.len());
        for id in track_ids {
            tracks.push(self.get_track(id, token).await?);
            on_track(tracks.len());
        }
        Ok(tracks)
    }
}
