use crate::{
    config::{ApiConfig, Credentials},
    error, info,
    spotify::Spotify,
};

/// Builds the client from the environment and obtains an access token.
///
/// Missing credentials are reported before any request is sent. Both cases
/// end the program, a run never continues without a token.
pub async fn authenticate() -> (Spotify, String) {
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!(
            "{}\nExport CLIENT_ID and CLIENT_SECRET from your Spotify application developer dashboard.",
            e
        ),
    };

    let spotify = Spotify::new(ApiConfig::from_env());

    info!("Requesting access token...");
    match spotify.obtain_token(&credentials).await {
        Ok(token) => (spotify, token.access_token),
        Err(e) => error!("Bad credentials? {}", e),
    }
}
