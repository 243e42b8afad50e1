//! Configuration management for gigmix.
//!
//! All runtime configuration comes from environment variables, optionally
//! loaded from a `.env` file in the platform-specific local data directory
//! (`<data_local_dir>/gigmix/.env`). Credentials are never hardcoded; service
//! base URLs carry sensible defaults and only need to be set when pointing the
//! tool at a test double.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory structure if it does not exist yet, then loads
/// `gigmix/.env` from the platform data dir:
///
/// - Linux: `~/.local/share/gigmix/.env`
/// - macOS: `~/Library/Application Support/gigmix/.env`
/// - Windows: `%LOCALAPPDATA%/gigmix/.env`
///
/// Returns an error string when the directory cannot be created; a missing
/// `.env` file is tolerated since every value can also come from the process
/// environment directly.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("gigmix/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Ticketmaster Discovery API consumer key.
///
/// # Panics
///
/// Panics if the `TICKETMASTER_API_KEY` environment variable is not set.
pub fn ticketmaster_apikey() -> String {
    env::var("TICKETMASTER_API_KEY").expect("TICKETMASTER_API_KEY must be set")
}

/// Returns the Ticketmaster Discovery API base URL.
///
/// Defaults to the public endpoint when `TICKETMASTER_API_URL` is unset.
pub fn ticketmaster_apiurl() -> String {
    env::var("TICKETMASTER_API_URL")
        .unwrap_or_else(|_| "https://app.ticketmaster.com/discovery/v2".to_string())
}

/// Returns the address for the local OAuth callback server.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify user ID playlists are created for.
///
/// # Panics
///
/// Panics if the `SPOTIFY_USER_ID` environment variable is not set.
pub fn spotify_user() -> String {
    env::var("SPOTIFY_USER_ID").expect("SPOTIFY_USER_ID must be set")
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// Keep this value out of logs and version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").expect("SPOTIFY_API_AUTH_CLIENT_SECRET must be set")
}

/// Returns the bearer token used for Spotify Web API calls.
///
/// Obtained manually via `gigmix auth`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_TOKEN` environment variable is not set.
pub fn spotify_token() -> String {
    env::var("SPOTIFY_TOKEN").expect("SPOTIFY_TOKEN must be set; run `gigmix auth` to obtain one")
}

/// Returns the OAuth redirect URI registered with the Spotify application.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the OAuth scope requested during authorization.
///
/// Defaults to `playlist-modify-public`, the only scope the tool needs.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| "playlist-modify-public".to_string())
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
