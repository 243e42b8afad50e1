use crate::{
    builder, config, error, info, success,
    ticketmaster::TicketmasterClient,
    types::SpotifyCredentials,
    utils, warning,
};

use super::events::spinner;

pub async fn playlist(
    start: &str,
    end: &str,
    region: u32,
    name: Option<String>,
    tracks_per_artist: usize,
    size: u32,
) {
    let ticketmaster = TicketmasterClient::new(config::ticketmaster_apikey());

    let pb = spinner("Fetching upcoming music events...");
    let result = ticketmaster.get_performer_names(start, end, region, size).await;
    pb.finish_and_clear();

    let artist_names = match result {
        Ok(names) => names,
        Err(e) => error!("Failed to fetch performers: {}", e),
    };

    if artist_names.is_empty() {
        warning!("No performers found in the requested window; nothing to do.");
        return;
    }
    info!("Found {} performers", artist_names.len());

    let playlist_name = match name {
        Some(name) => name,
        None => match utils::suggest_playlist_name(region, start, end) {
            Ok(name) => name,
            Err(e) => error!("Failed to derive a playlist name: {}", e),
        },
    };

    let credentials = SpotifyCredentials {
        client_id: config::spotify_client_id(),
        client_secret: config::spotify_client_secret(),
        token: config::spotify_token(),
    };

    match builder::create_playlist_from_artists(
        &config::spotify_user(),
        credentials,
        &artist_names,
        &playlist_name,
        tracks_per_artist,
    )
    .await
    {
        Ok(playlist_id) => {
            success!("Playlist \"{}\" is ready (id {})", playlist_name, playlist_id)
        }
        Err(e) => error!("Playlist build aborted: {}", e),
    }
}
