use std::path::PathBuf;

use crate::{
    error, info,
    output::{self, OutputFormat},
    success, utils,
};

use super::{auth::authenticate, emit, spinner};

pub async fn tracks(file: PathBuf, format: OutputFormat, output_path: Option<PathBuf>) {
    if let Err(e) = output::check_output(format, output_path.as_deref()) {
        error!("{}\nUse --format text, json or csv to write a file.", e);
    }

    let content = match async_fs::read_to_string(&file).await {
        Ok(content) => content,
        Err(e) => error!("Cannot read {}. Err: {}", file.display(), e),
    };

    let track_ids = match utils::parse_track_list(&content) {
        Ok(ids) => ids,
        Err(e) => error!(
            "{}\nThe file should contain one Spotify track URL per line.",
            e
        ),
    };

    let (spotify, token) = authenticate().await;

    info!("Fetching {} tracks", track_ids.len());
    let pb = spinner("Fetching tracks...");
    let result = spotify
        .get_tracks(&track_ids, &token, |done| {
            pb.set_message(format!("Fetched {}/{} tracks...", done, track_ids.len()))
        })
        .await;
    pb.finish_and_clear();

    let tracks = match result {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch tracks. Err: {}", e),
    };
    success!("Fetched {} tracks!", tracks.len());

    let records = output::to_records(tracks.iter().map(Some));

    let path = match (format.writes_file(), output_path) {
        (false, _) => None,
        (true, Some(path)) => Some(path),
        (true, None) => {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tracks".to_string());
            Some(output::default_path(&stem, format))
        }
    };

    emit(&records, format, path).await;
}
