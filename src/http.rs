//! Shared HTTP request helper.
//!
//! Both API clients funnel their calls through [`make_request`] so that status
//! handling stays uniform: {200, 201, 202} count as success, everything else
//! becomes [`ApiError::RequestFailed`] carrying the status code and the raw
//! response body. The helper performs a single request - no retries, no
//! backoff, no explicit timeout beyond reqwest's defaults.

use reqwest::{
    Client, Response,
    header::{CONTENT_TYPE, HeaderMap},
};

use crate::errors::{ApiError, Result};

/// Status codes treated as success by [`make_request`].
pub const SUCCESS_CODES: [u16; 3] = [200, 201, 202];

/// Issues a single GET or POST request and checks the response status.
///
/// # Arguments
///
/// * `method` - Method tag, either `"get"` or `"post"`; anything else fails
///   with [`ApiError::UnsupportedMethod`] before any I/O happens
/// * `url` - Fully assembled request URL, query string included
/// * `headers` - Optional headers (authorization, etc.)
/// * `body` - Optional request body; when present it is sent verbatim with a
///   `Content-Type: application/json` header
///
/// # Returns
///
/// The raw [`Response`] on success, left undecoded so each caller can pick
/// its own response type.
///
/// # Errors
///
/// - [`ApiError::UnsupportedMethod`] for an unknown method tag
/// - [`ApiError::RequestFailed`] when the status code is not in
///   [`SUCCESS_CODES`]; the error carries the status and the body text
/// - [`ApiError::Transport`] for connection-level failures
pub async fn make_request(
    method: &str,
    url: &str,
    headers: Option<HeaderMap>,
    body: Option<String>,
) -> Result<Response> {
    let client = Client::new();

    let mut request = match method {
        "get" => client.get(url),
        "post" => client.post(url),
        other => return Err(ApiError::UnsupportedMethod(other.to_string())),
    };

    if let Some(headers) = headers {
        request = request.headers(headers);
    }
    if let Some(body) = body {
        request = request.header(CONTENT_TYPE, "application/json").body(body);
    }

    let response = request.send().await?;

    let status = response.status().as_u16();
    if !SUCCESS_CODES.contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::RequestFailed { status, body });
    }

    Ok(response)
}
