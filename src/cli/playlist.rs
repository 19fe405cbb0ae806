use std::path::PathBuf;

use crate::{
    error, info,
    output::{self, OutputFormat},
    success, utils, warning,
};

use super::{auth::authenticate, emit, spinner};

pub async fn playlist(source: String, format: OutputFormat, output_path: Option<PathBuf>) {
    if let Err(e) = output::check_output(format, output_path.as_deref()) {
        error!("{}\nUse --format text, json or csv to write a file.", e);
    }

    let playlist_id = match utils::resolve_playlist_id(&source) {
        Ok(id) => id,
        Err(e) => error!("{}\nExpected a playlist URI, URL or ID.", e),
    };

    let (spotify, token) = authenticate().await;

    info!("Fetching tracks of playlist {}", playlist_id);
    let pb = spinner("Fetching playlist tracks...");
    let result = spotify
        .collect_tracks_with_progress(&playlist_id, &token, |progress| match progress.total {
            Some(total) => pb.set_message(format!("Fetched {}/{} tracks...", progress.items, total)),
            None => pb.set_message(format!("Fetched {} tracks...", progress.items)),
        })
        .await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch playlist tracks. Err: {}", e),
    };
    success!("Fetched {} tracks!", tracks.len());

    let unavailable = tracks.iter().filter(|t| t.is_none()).count();
    if unavailable > 0 {
        warning!("{} playlist entries have no track data", unavailable);
    }

    let records = output::to_records(tracks.iter().map(Option::as_ref));

    let path = match (format.writes_file(), output_path) {
        (false, _) => None,
        (true, Some(path)) => Some(path),
        (true, None) => {
            let name = match spotify.get_playlist_name(&playlist_id, &token).await {
                Ok(name) => name,
                Err(e) => {
                    warning!("Failed to fetch playlist name, using its ID. Err: {}", e);
                    playlist_id.clone()
                }
            };
            Some(output::default_path(&name, format))
        }
    };

    emit(&records, format, path).await;
}
