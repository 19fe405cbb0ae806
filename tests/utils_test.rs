use spotracks::error::Error;
use spotracks::utils::*;

const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";
const TRACK_ID: &str = "4cOdK2wGLETKBW3PvgPWqT";

#[test]
fn test_resolve_playlist_id_from_uri() {
    let uri = format!("spotify:playlist:{}", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&uri).unwrap(), PLAYLIST_ID);
}

#[test]
fn test_resolve_playlist_id_from_url() {
    // Plain URL
    let url = format!("https://open.spotify.com/playlist/{}", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&url).unwrap(), PLAYLIST_ID);

    // Share links carry a query string
    let shared = format!("https://open.spotify.com/playlist/{}?si=abc123def", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&shared).unwrap(), PLAYLIST_ID);

    // Localized links have an extra path segment
    let intl = format!("https://open.spotify.com/intl-de/playlist/{}", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&intl).unwrap(), PLAYLIST_ID);

    // Scheme-less and trailing slash
    let bare = format!("open.spotify.com/playlist/{}/", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&bare).unwrap(), PLAYLIST_ID);
}

#[test]
fn test_resolve_playlist_id_from_bare_id() {
    assert_eq!(resolve_playlist_id(PLAYLIST_ID).unwrap(), PLAYLIST_ID);

    // Surrounding whitespace is ignored
    let padded = format!("  {}\n", PLAYLIST_ID);
    assert_eq!(resolve_playlist_id(&padded).unwrap(), PLAYLIST_ID);
}

#[test]
fn test_resolve_playlist_id_rejects_other_kinds() {
    let track_uri = format!("spotify:track:{}", TRACK_ID);
    assert!(matches!(
        resolve_playlist_id(&track_uri),
        Err(Error::InvalidSource(_))
    ));

    let album_url = format!("https://open.spotify.com/album/{}", PLAYLIST_ID);
    assert!(resolve_playlist_id(&album_url).is_err());
}

#[test]
fn test_resolve_playlist_id_rejects_garbage() {
    assert!(resolve_playlist_id("").is_err());
    assert!(resolve_playlist_id("my playlist").is_err());
    assert!(resolve_playlist_id("tracks.txt").is_err());
    assert!(resolve_playlist_id("spotify:playlist:").is_err());
    assert!(resolve_playlist_id("https://open.spotify.com/playlist/").is_err());
    assert!(resolve_playlist_id("ftp://open.spotify.com/playlist/abc").is_err());
}

#[test]
fn test_resolve_track_id() {
    let url = format!("https://open.spotify.com/track/{}?si=xyz", TRACK_ID);
    assert_eq!(resolve_track_id(&url).unwrap(), TRACK_ID);

    let uri = format!("spotify:track:{}", TRACK_ID);
    assert_eq!(resolve_track_id(&uri).unwrap(), TRACK_ID);
}

#[test]
fn test_parse_track_list() {
    let content = format!(
        "https://open.spotify.com/track/{a}\r\n\nspotify:track:{b}\n   https://open.spotify.com/track/{a}?si=1  \n",
        a = TRACK_ID,
        b = "1301WleyT98MSxVHPZCA6M"
    );

    let ids = parse_track_list(&content).unwrap();

    // Order and duplicates are preserved, blank lines skipped
    assert_eq!(ids, vec![TRACK_ID, "1301WleyT98MSxVHPZCA6M", TRACK_ID]);
}

#[test]
fn test_parse_track_list_reports_line_number() {
    let content = format!(
        "https://open.spotify.com/track/{}\nnot a track\n",
        TRACK_ID
    );

    match parse_track_list(&content) {
        Err(Error::InvalidTrackList { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "not a track");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_track_list_rejects_playlists_and_bare_ids() {
    let playlist = format!("https://open.spotify.com/playlist/{}", PLAYLIST_ID);
    assert!(parse_track_list(&playlist).is_err());

    // Bare IDs are accepted on the command line but not inside files
    assert!(parse_track_list(TRACK_ID).is_err());
}

#[test]
fn test_parse_track_list_empty_file() {
    assert!(parse_track_list("").is_err());
    assert!(parse_track_list("\n \n").is_err());
}

#[test]
fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("Today's Top Hits"), "Today's Top Hits");
    assert_eq!(sanitize_filename("AC/DC: Best Of"), "AC_DC_ Best Of");
    assert_eq!(sanitize_filename("what?*<>|\"\\"), "what_______");
    assert_eq!(sanitize_filename("tabs\tand\nnewlines"), "tabs_and_newlines");

    // Trailing dots and whitespace are trimmed
    assert_eq!(sanitize_filename("  Summer... "), "Summer");

    // Nothing usable left
    assert_eq!(sanitize_filename(""), "playlist");
    assert_eq!(sanitize_filename(" . "), "playlist");
}
