use crate::{
    config, error, info,
    spotify::SpotifyClient,
    types::SpotifyCredentials,
};

pub async fn info() {
    let client = SpotifyClient::new(SpotifyCredentials {
        client_id: config::spotify_client_id(),
        client_secret: config::spotify_client_secret(),
        token: config::spotify_token(),
    });

    let user = match client.get_user_config().await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch user info: {}", e),
    };

    info!("User id: {}", user.id);
    info!(
        "Display name: {}",
        user.display_name.unwrap_or_else(|| "-".to_string())
    );
}
