use std::collections::HashSet;

use super::Spotify;
use crate::{
    error::{Error, Result},
    types::{PlaylistName, Track, TrackItem, TrackPage},
};

/// Counts reported after every fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    pub pages: usize,
    pub items: usize,
    pub total: Option<u64>,
}

impl Spotify {
    /// Retrieves every track of a playlist, following pagination links.
    ///
    /// See [`Spotify::collect_tracks_with_progress`].
    pub async fn collect_tracks(&self, playlist_id: &str, token: &str) -> Result<Vec<Option<Track>>> {
        self.collect_tracks_with_progress(playlist_id, token, |_| {})
            .await
    }

    /// Retrieves every track of a playlist, following pagination links.
    ///
    /// Starts at `/playlists/{id}/tracks` and keeps requesting the exact URL
    /// found in the `next` field of each page until a page without one is
    /// returned. Pages are fetched strictly one after another because the
    /// address of a page is only known once the previous one has arrived.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Bare playlist ID (already resolved from a URI or URL)
    /// * `token` - Access token from [`Spotify::obtain_token`]
    /// * `on_page` - Called after each page with the running counts
    ///
    /// # Returns
    ///
    /// One entry per playlist item, in server order across all pages. Null
    /// items and items whose `track` is null or missing are kept as `None`,
    /// and null fields inside a track decode as empty, so that the length
    /// always equals the number of items returned by the server.
    ///
    /// # Errors
    ///
    /// The collection is all-or-nothing. Any failed page (transport error,
    /// non-success status, malformed JSON) fails the whole call and the items
    /// of earlier pages are discarded. The loop is bounded by
    /// `ApiConfig::max_pages` ([`Error::PaginationLimit`]) and rejects a `next`
    /// link that points back to an already fetched page
    /// ([`Error::PaginationCycle`]).
    pub async fn collect_tracks_with_progress<F>(
        &self,
        playlist_id: &str,
        token: &str,
        mut on_page: F,
    ) -> Result<Vec<Option<Track>>>
    where
        F: FnMut(PageProgress),
    {
        let mut items: Vec<Option<TrackItem>> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut next: Option<String> = Some(self.playlist_tracks_url(playlist_id));
        let mut pages = 0;

        while let Some(url) = next {
            if pages >= self.config.max_pages {
                return Err(Error::PaginationLimit(pages));
            }
            if !visited.insert(url.clone()) {
                return Err(Error::PaginationCycle(url));
            }

            let page: TrackPage = self.get_json(&url, token).await?;
            pages += 1;

            items.extend(page.items);
            next = page.next;

            on_page(PageProgress {
                pages,
                items: items.len(),
                total: page.total,
            });
        }

        Ok(items
            .into_iter()
            .map(|item| item.and_then(|i| i.track))
            .collect())
    }

    /// Fetches only the name of a playlist.
    pub async fn get_playlist_name(&self, playlist_id: &str, token: &str) -> Result<String> {
        let url = format!(
            "{uri}/playlists/{id}?fields=name",
            uri = self.config.api_url,
            id = playlist_id
        );
        let playlist: PlaylistName = self.get_json(&url, token).await?;
        Ok(playlist.name)
    }

    fn playlist_tracks_url(&self, playlist_id: &str) -> String {
        format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.config.api_url,
            id = playlist_id
        )
    }
}
