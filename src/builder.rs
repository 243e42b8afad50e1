//! Playlist orchestration.
//!
//! Given a list of artist names, creates one playlist and walks the distinct
//! names, resolving each to a Spotify ID and appending that artist's top
//! tracks plus at most one podcast episode. Strictly sequential; an error at
//! any step aborts the run, and whatever was already appended stays in the
//! playlist - there is no rollback.

use std::collections::HashSet;

use crate::{
    errors::Result,
    info,
    spotify::SpotifyClient,
    types::SpotifyCredentials,
};

/// Episodes appended per artist.
const MAX_EPISODES_PER_ARTIST: usize = 1;

/// Creates a playlist and fills it from a list of artist names.
///
/// Exactly one playlist-creation call is made, and each distinct name gets at
/// most one resolution attempt. Names are deduplicated with set semantics, so
/// the processing order is arbitrary and unrelated to the input order. Per
/// distinct name the steps are: resolve the ID; when found, append up to
/// `top_n_per_artist` top tracks, then - independently of whether any tracks
/// were found - up to one podcast episode. Unresolved names are skipped
/// without failing the run.
///
/// # Arguments
///
/// * `user_id` - Spotify user the playlist is created for
/// * `credentials` - Spotify API credentials, moved into the client
/// * `artist_names` - Performer names, duplicates allowed
/// * `playlist_name` - Title for the new public playlist
/// * `top_n_per_artist` - Cap on tracks appended per artist
///
/// # Returns
///
/// The ID of the created playlist.
///
/// # Errors
///
/// Any client error propagates immediately; the playlist keeps whatever was
/// appended before the failure.
pub async fn create_playlist_from_artists(
    user_id: &str,
    credentials: SpotifyCredentials,
    artist_names: &[String],
    playlist_name: &str,
    top_n_per_artist: usize,
) -> Result<String> {
    let client = SpotifyClient::new(credentials);

    let playlist = client.create_playlist(user_id, playlist_name, true).await?;
    info!("Created playlist \"{}\"", playlist.name);

    // Set semantics on purpose: duplicates collapse and order is dropped.
    let distinct_names: HashSet<&String> = artist_names.iter().collect();

    for artist_name in distinct_names {
        let Some(artist_id) = client.resolve_artist_id(artist_name).await? else {
            continue;
        };

        client
            .add_top_tracks_for_artist(&artist_id, &playlist.id, top_n_per_artist)
            .await?;

        // The episode search is independent of the track outcome.
        client
            .add_podcast_episode(artist_name, &playlist.id, MAX_EPISODES_PER_ARTIST)
            .await?;
    }

    Ok(playlist.id)
}
