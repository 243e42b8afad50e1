//! Token bootstrap for the Spotify Web API.
//!
//! Implements the authorization-code flow: a local callback server is
//! started, the browser is pointed at the Spotify authorize URL, and the
//! callback exchanges the returned code for a bearer token via the
//! Basic-auth-protected token endpoint. The resulting token, scope, and
//! expiry are printed for manual use (`SPOTIFY_TOKEN` in the `.env` file);
//! the tool does not persist or refresh tokens itself.

use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    errors::{ApiError, Result},
    info,
    server::start_api_server,
    success,
    types::{Token, TokenResponse},
    warning,
};

/// Runs the interactive authorization flow.
///
/// Starts the callback server, opens the browser at the authorize URL, and
/// waits up to a minute for the callback to deposit a token into the shared
/// state. On success the token, scope, and expiry are printed so the user can
/// copy the token into their configuration.
pub async fn auth(shared_state: Arc<Mutex<Option<Token>>>) {
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let auth_url = format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope()
    );

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(token) => {
            success!("Authentication successful!");
            info!("Scope: {}", token.scope);
            info!("Expires in: {} seconds", token.expires_in);
            info!("Token (set SPOTIFY_TOKEN to this value):\n{}", token.access_token);
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<Token>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref() {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a bearer token.
///
/// POSTs the code as a form to the token endpoint, authenticated with
/// `Authorization: Basic base64(client_id:client_secret)`.
pub async fn exchange_code(code: &str) -> Result<Token> {
    let basic = STANDARD.encode(format!(
        "{}:{}",
        config::spotify_client_id(),
        config::spotify_client_secret()
    ));

    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {basic}"))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await?;

    let status = response.status().as_u16();
    if !crate::http::SUCCESS_CODES.contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed { status, body });
    }

    let json = response.json::<TokenResponse>().await?;

    Ok(Token {
        access_token: json.access_token,
        refresh_token: json.refresh_token,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
