//! HTTP handlers for the local token-bootstrap server.
//!
//! Two endpoints exist: the OAuth `/callback` that exchanges the authorization
//! code for a bearer token, and a `/health` probe. Both are only reachable on
//! the loopback address configured via `SERVER_ADDRESS` and only while a
//! `gigmix auth` run is in progress.

pub mod callback;
pub mod health;

pub use callback::callback;
pub use health::health;
