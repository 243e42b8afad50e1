use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::Token, warning};

/// OAuth callback: exchanges the `code` query parameter for a bearer token.
///
/// On success the token is stored in the shared state for the waiting CLI and
/// the token, scope, and expiry are echoed into the browser for manual use,
/// mirroring what the console prints.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>,
) -> Html<String> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>".to_string());
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            let page = format!(
                "<h2>Authentication successful.</h2>\
                 <p>Scope={scope}<br>Expiration={expires} seconds<br>Token={token}</p>\
                 <p>Close the browser window.</p>",
                scope = token.scope,
                expires = token.expires_in,
                token = token.access_token
            );
            let mut state = shared_state.lock().await;
            *state = Some(token);
            Html(page)
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>".to_string())
        }
    }
}
