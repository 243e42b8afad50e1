//! # Spotify Integration Module
//!
//! Client for the Spotify Web API operations the playlist builder needs:
//! search, current-user lookup, artist top tracks, playlist creation, and
//! playlist-entry addition, plus the two composite operations layered on top
//! (artist-name resolution and per-artist track/podcast appending).
//!
//! ## Core Modules
//!
//! - [`artists`] - Top-tracks retrieval and the name-to-ID resolution scan
//! - [`playlist`] - Playlist creation and entity addition, plus composites
//! - [`auth`] - Authorization-code token bootstrap (browser + local callback)
//!
//! Every endpoint call is authenticated with the bearer token held in the
//! client's credentials and issued through [`crate::http::make_request`];
//! calls are strictly sequential and never retried.

pub mod artists;
pub mod auth;
pub mod playlist;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::{
    errors::{ApiError, Result},
    http,
    types::{CurrentUser, SearchResponse, SpotifyCredentials},
};

/// Search types accepted by [`SpotifyClient::search`].
pub const SUPPORTED_SEARCH_TYPES: [&str; 3] = ["artist", "episode", "show"];

/// Client for the Spotify Web API.
///
/// Holds the credentials and base URL for its lifetime; nothing is mutated
/// after construction, and a single logical flow owns each instance.
pub struct SpotifyClient {
    credentials: SpotifyCredentials,
    base_url: String,
}

impl SpotifyClient {
    /// Creates a client from explicit credentials, with the base URL taken
    /// from configuration.
    pub fn new(credentials: SpotifyCredentials) -> Self {
        SpotifyClient {
            credentials,
            base_url: crate::config::spotify_apiurl(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer-auth headers derived from the held token.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let value = format!("Bearer {}", self.credentials.token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("")),
        );
        headers
    }

    /// Generic search across the supported entity types.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search string
    /// * `search_type` - One of `artist`, `episode`, or `show`
    ///
    /// # Returns
    ///
    /// The decoded search body; only the container matching `search_type` is
    /// populated.
    ///
    /// # Errors
    ///
    /// - [`ApiError::UnsupportedSearchType`] for any other type, checked
    ///   before any request is made
    /// - [`ApiError::RequestFailed`] / [`ApiError::Transport`] from the
    ///   request helper
    pub async fn search(&self, query: &str, search_type: &str) -> Result<SearchResponse> {
        if !SUPPORTED_SEARCH_TYPES.contains(&search_type) {
            return Err(ApiError::UnsupportedSearchType(search_type.to_string()));
        }

        let api_url = format!(
            "{uri}/search?q={query}&type={search_type}",
            uri = &self.base_url,
            query = query,
            search_type = search_type
        );

        let response = http::make_request("get", &api_url, Some(self.auth_headers()), None).await?;
        Ok(response.json::<SearchResponse>().await?)
    }

    /// Retrieves the current user's profile (`/me`).
    pub async fn get_user_config(&self) -> Result<CurrentUser> {
        let api_url = format!("{uri}/me", uri = &self.base_url);

        let response = http::make_request("get", &api_url, Some(self.auth_headers()), None).await?;
        Ok(response.json::<CurrentUser>().await?)
    }
}
