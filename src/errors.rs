//! Error taxonomy shared by the Ticketmaster and Spotify clients.
//!
//! Every failure surfaced by the API layer is one of the variants below and
//! propagates to the immediate caller; there are no retries and no recovery
//! inside the clients. "No match" outcomes (artist not resolved, no top tracks,
//! no episodes) are deliberately *not* errors - they are `Ok(None)` at the call
//! sites, so an absent artist never aborts a playlist build on its own.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures produced by the HTTP helper and the two API clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request helper was handed a method tag other than `get` or `post`.
    #[error("request method \"{0}\" is not supported")]
    UnsupportedMethod(String),

    /// The remote service answered with a status code outside {200, 201, 202}.
    #[error("request failed with status code {status} and message {body}")]
    RequestFailed { status: u16, body: String },

    /// A search was attempted with a type other than artist, episode, or show.
    #[error("search type \"{0}\" is not supported; available options are {supported}",
        supported = crate::spotify::SUPPORTED_SEARCH_TYPES.join(", "))]
    UnsupportedSearchType(String),

    /// The events response carried no `_embedded` results container.
    #[error("could not find any events")]
    NoEventsFound,

    /// The region id is missing from the static DMA table.
    #[error("unknown region id {0}")]
    UnknownRegion(u32),

    /// A start/end date could not be parsed as a date or datetime.
    #[error("could not parse date \"{0}\"")]
    InvalidDate(String),

    /// Transport-level failure (connection, TLS, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
