use crate::{
    errors::Result,
    http, info,
    types::{ArtistItem, TopTracksResponse, Track},
    warning,
};

use super::SpotifyClient;

/// Market code used when the caller does not care about one.
pub const DEFAULT_MARKET: &str = "ES";

/// Candidate cap for the name-resolution scan.
///
/// Only the first three search results are ever inspected, even when the
/// result set is larger and an exact match sits further down. Long-standing
/// behavior; check with the product owners before widening it.
pub const MAX_MATCH_ATTEMPTS: usize = 3;

/// Scans `items` in order for an exact, case-sensitive name match, looking at
/// no more than [`MAX_MATCH_ATTEMPTS`] candidates. Returns the matched ID on
/// the first hit.
pub fn exact_artist_match(items: &[ArtistItem], artist_name: &str) -> Option<String> {
    items
        .iter()
        .take(MAX_MATCH_ATTEMPTS)
        .find(|item| item.name == artist_name)
        .map(|item| item.id.clone())
}

impl SpotifyClient {
    /// Retrieves an artist's top tracks for a market.
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify ID of the artist
    /// * `market` - Two-letter market code; see [`DEFAULT_MARKET`]
    ///
    /// # Returns
    ///
    /// The tracks in the order the API ranks them; callers that truncate must
    /// keep the front of this order.
    pub async fn get_top_tracks(&self, artist_id: &str, market: &str) -> Result<Vec<Track>> {
        let api_url = format!(
            "{uri}/artists/{id}/top-tracks?market={market}",
            uri = self.base_url(),
            id = artist_id,
            market = market
        );

        let response = http::make_request("get", &api_url, Some(self.auth_headers()), None).await?;
        let json = response.json::<TopTracksResponse>().await?;

        Ok(json.tracks)
    }

    /// Resolves an artist name to a Spotify ID, best-effort.
    ///
    /// Searches for the name with type `artist` and scans the results in their
    /// original order for an exact case-sensitive match, capped at
    /// [`MAX_MATCH_ATTEMPTS`] candidates. `Ok(None)` means no match - it is a
    /// sentinel, not an error, and an exact match beyond the cap is missed by
    /// design.
    pub async fn resolve_artist_id(&self, artist_name: &str) -> Result<Option<String>> {
        let results = self.search(artist_name, "artist").await?;

        let Some(artists) = results.artists else {
            return Ok(None);
        };

        match exact_artist_match(&artists.items, artist_name) {
            Some(id) => {
                info!("found artist \"{}\"", artist_name);
                Ok(Some(id))
            }
            None => {
                warning!("could not find artist \"{}\"", artist_name);
                Ok(None)
            }
        }
    }
}
