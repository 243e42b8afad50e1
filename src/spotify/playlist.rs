use crate::{
    errors::Result,
    http,
    types::{AddEntitiesRequest, AddEntitiesResponse, CreatePlaylistRequest, CreatePlaylistResponse},
    utils,
};

use super::{SpotifyClient, artists::DEFAULT_MARKET};

impl SpotifyClient {
    /// Creates a playlist for a user.
    ///
    /// POSTs `{name, public}` to `/users/{id}/playlists`. The returned body
    /// carries the new playlist's ID, which every subsequent append needs -
    /// creation always precedes addition.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        playlist_name: &str,
        public: bool,
    ) -> Result<CreatePlaylistResponse> {
        let api_url = format!(
            "{uri}/users/{id}/playlists",
            uri = self.base_url(),
            id = user_id
        );

        let body = serde_json::to_string(&CreatePlaylistRequest {
            name: playlist_name.to_string(),
            public,
        })?;

        let response =
            http::make_request("post", &api_url, Some(self.auth_headers()), Some(body)).await?;
        Ok(response.json::<CreatePlaylistResponse>().await?)
    }

    /// Appends a batch of track/episode URIs to a playlist.
    ///
    /// Additive only - entries are never updated or removed through this
    /// client.
    pub async fn add_entities(
        &self,
        entity_uris: &[String],
        playlist_id: &str,
    ) -> Result<AddEntitiesResponse> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.base_url(),
            id = playlist_id
        );

        let body = serde_json::to_string(&AddEntitiesRequest {
            uris: entity_uris.to_vec(),
        })?;

        let response =
            http::make_request("post", &api_url, Some(self.auth_headers()), Some(body)).await?;
        Ok(response.json::<AddEntitiesResponse>().await?)
    }

    /// Appends up to `max_tracks` of an artist's top tracks to a playlist.
    ///
    /// Fetches the top tracks and appends the first `min(available, max_tracks)`
    /// of them in source order. `Ok(None)` when the artist has no top tracks;
    /// nothing is appended in that case.
    pub async fn add_top_tracks_for_artist(
        &self,
        artist_id: &str,
        playlist_id: &str,
        max_tracks: usize,
    ) -> Result<Option<AddEntitiesResponse>> {
        let top_tracks = self.get_top_tracks(artist_id, DEFAULT_MARKET).await?;

        if top_tracks.is_empty() {
            return Ok(None);
        }

        let uris = utils::track_uris(&top_tracks, max_tracks);
        let response = self.add_entities(&uris, playlist_id).await?;

        Ok(Some(response))
    }

    /// Appends up to `max_episodes` podcast episodes matching an artist name.
    ///
    /// The episode search is keyed by the artist name as a literal query
    /// string - there is no dedicated podcast-artist search - so the match is
    /// loose on purpose. Takes episodes from the front of the result order;
    /// `Ok(None)` when the search returns nothing.
    pub async fn add_podcast_episode(
        &self,
        artist_name: &str,
        playlist_id: &str,
        max_episodes: usize,
    ) -> Result<Option<AddEntitiesResponse>> {
        let results = self.search(artist_name, "episode").await?;

        let episodes = match results.episodes {
            Some(page) if !page.items.is_empty() => page.items,
            _ => return Ok(None),
        };

        let uris = utils::episode_uris(&episodes, max_episodes);
        let response = self.add_entities(&uris, playlist_id).await?;

        Ok(Some(response))
    }
}
