//! Configuration management for spotracks.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and turns them into explicit values ([`Credentials`] and
//! [`ApiConfig`]) that are handed to the Spotify client at startup. Nothing in
//! the client itself reads the process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const MAX_PAGES_VAR: &str = "SPOTIFY_MAX_PAGES";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the current working directory first and then in
/// the platform-specific local data directory under `spotracks/.env`. Missing
/// files are not an error. Variables that are already set in the process
/// environment are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotracks/.env`
/// - macOS: `~/Library/Application Support/spotracks/.env`
/// - Windows: `%LOCALAPPDATA%/spotracks/.env`
///
/// # Errors
///
/// Returns an error string if an existing `.env` file cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = env_path();
    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotracks/.env");
    path
}

/// Client id and secret of a Spotify application.
///
/// Both values are guaranteed to be non-empty; an instance can only be built
/// through [`Credentials::new`] or one of the lookup constructors.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Validates and wraps a credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when either value is empty or only
    /// whitespace.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() {
            return Err(Error::MissingCredential(CLIENT_ID_VAR));
        }
        if client_secret.trim().is_empty() {
            return Err(Error::MissingCredential(CLIENT_SECRET_VAR));
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Reads the credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the credentials through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(CLIENT_ID_VAR).unwrap_or_default();
        let client_secret = lookup(CLIENT_SECRET_VAR).unwrap_or_default();
        Self::new(client_id, client_secret)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

// keep the secret out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Endpoints and limits used by the Spotify client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Client-credentials token endpoint.
    pub token_url: String,
    /// Upper bound of pages fetched for one collection.
    pub max_pages: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ApiConfig {
    /// Reads the endpoint overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration through an arbitrary key lookup.
    ///
    /// Empty values fall back to the defaults, as does a `SPOTIFY_MAX_PAGES`
    /// that is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty(API_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: non_empty(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            max_pages: non_empty(MAX_PAGES_VAR)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_PAGES),
        }
    }

    /// Points both endpoints at a common base, e.g. a local mock server.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_url: format!("{}/v1", base),
            token_url: format!("{}/api/token", base),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn credentials_require_both_values() {
        let ok = Credentials::from_lookup(lookup(&[("CLIENT_ID", "id"), ("CLIENT_SECRET", "s")]));
        assert!(ok.is_ok());

        let missing_secret = Credentials::from_lookup(lookup(&[("CLIENT_ID", "id")]));
        assert!(matches!(
            missing_secret,
            Err(Error::MissingCredential(CLIENT_SECRET_VAR))
        ));

        let blank_id = Credentials::new("  ", "secret");
        assert!(matches!(blank_id, Err(Error::MissingCredential(CLIENT_ID_VAR))));
    }

    #[test]
    fn debug_output_hides_secret() {
        let creds = Credentials::new("id", "very-secret").unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("id"));
        assert!(!printed.contains("very-secret"));
    }

    #[test]
    fn api_config_defaults_and_overrides() {
        assert_eq!(ApiConfig::from_lookup(lookup(&[])), ApiConfig::default());

        let cfg = ApiConfig::from_lookup(lookup(&[
            ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
            ("SPOTIFY_MAX_PAGES", "5"),
        ]));
        assert_eq!(cfg.api_url, "http://localhost:9000/v1");
        assert_eq!(cfg.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(cfg.max_pages, 5);

        let bad_pages = ApiConfig::from_lookup(lookup(&[("SPOTIFY_MAX_PAGES", "0")]));
        assert_eq!(bad_pages.max_pages, DEFAULT_MAX_PAGES);
    }
}
