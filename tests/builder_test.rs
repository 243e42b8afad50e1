//! End-to-end orchestration test against a mock Spotify server.
//!
//! Keep this file to a single test: it overrides `SPOTIFY_API_URL` for the
//! whole process, which would race with any parallel test in the same binary.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

use gigmix::builder::create_playlist_from_artists;
use gigmix::types::SpotifyCredentials;

#[derive(Default)]
struct MockSpotify {
    playlists_created: usize,
    artist_searches: Vec<String>,
    episode_searches: Vec<String>,
    top_track_requests: Vec<String>,
    added_batches: Vec<Vec<String>>,
}

type Shared = Arc<Mutex<MockSpotify>>;

async fn search(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let query = params.get("q").cloned().unwrap_or_default();
    let search_type = params.get("type").cloned().unwrap_or_default();

    match search_type.as_str() {
        "artist" => {
            state.lock().unwrap().artist_searches.push(query.clone());
            let items = match query.as_str() {
                "Artist A" => json!([
                    {"id": "ida", "name": "Artist A"},
                    {"id": "ida2", "name": "Artist A Tribute"}
                ]),
                "Artist B" => json!([{"id": "idb", "name": "Artist B"}]),
                // No exact match among the candidates
                _ => json!([{"id": "idx", "name": "Somebody Else"}]),
            };
            Json(json!({"artists": {"items": items}}))
        }
        "episode" => {
            state.lock().unwrap().episode_searches.push(query.clone());
            let items = match query.as_str() {
                "Artist A" => json!([
                    {"id": "ep1", "name": "All About Artist A"},
                    {"id": "ep2", "name": "Artist A Again"}
                ]),
                "Artist B" => json!([{"id": "epb", "name": "Artist B Hour"}]),
                _ => json!([]),
            };
            Json(json!({"episodes": {"items": items}}))
        }
        _ => Json(json!({})),
    }
}

async fn create_playlist(
    State(state): State<Shared>,
    Path(_user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.lock().unwrap().playlists_created += 1;
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "pl1",
            "name": body["name"],
            "public": body["public"],
        })),
    )
}

async fn top_tracks(State(state): State<Shared>, Path(artist_id): Path<String>) -> Json<Value> {
    state.lock().unwrap().top_track_requests.push(artist_id.clone());

    // Artist B has no top tracks at all
    if artist_id == "idb" {
        return Json(json!({"tracks": []}));
    }

    Json(json!({"tracks": [
        {"id": "t1", "name": "One"},
        {"id": "t2", "name": "Two"},
        {"id": "t3", "name": "Three"},
        {"id": "t4", "name": "Four"},
        {"id": "t5", "name": "Five"}
    ]}))
}

async fn add_tracks(
    State(state): State<Shared>,
    Path(_playlist_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let uris: Vec<String> = body["uris"]
        .as_array()
        .unwrap()
        .iter()
        .map(|uri| uri.as_str().unwrap().to_string())
        .collect();
    state.lock().unwrap().added_batches.push(uris);
    (StatusCode::CREATED, Json(json!({"snapshot_id": "snap1"})))
}

#[tokio::test]
async fn test_orchestration_against_mock_service() {
    let shared: Shared = Arc::new(Mutex::new(MockSpotify::default()));

    let app = Router::new()
        .route("/search", get(search))
        .route("/users/{user_id}/playlists", post(create_playlist))
        .route("/artists/{artist_id}/top-tracks", get(top_tracks))
        .route("/playlists/{playlist_id}/tracks", post(add_tracks))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Point the client at the mock before any client is constructed.
    unsafe {
        std::env::set_var("SPOTIFY_API_URL", format!("http://{}", addr));
    }

    let credentials = SpotifyCredentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        token: "token".to_string(),
    };

    // "Artist A" twice to exercise deduplication; "Artist B" resolves but has
    // no top tracks; "Ghost Artist" resolves to nothing and must be skipped
    // without aborting the run. Processing order is set-random, so every
    // cross-artist assertion below is order-insensitive.
    let artist_names = vec![
        "Artist A".to_string(),
        "Artist A".to_string(),
        "Artist B".to_string(),
        "Ghost Artist".to_string(),
    ];

    let playlist_id =
        create_playlist_from_artists("user1", credentials, &artist_names, "Test Playlist", 3)
            .await
            .unwrap();

    assert_eq!(playlist_id, "pl1");

    let state = shared.lock().unwrap();

    // Exactly one playlist creation, one resolution per distinct name
    assert_eq!(state.playlists_created, 1);
    assert_eq!(state.artist_searches.len(), 3);

    // Only resolved artists get a top-tracks fetch and an episode search
    let mut top_track_requests = state.top_track_requests.clone();
    top_track_requests.sort();
    assert_eq!(top_track_requests, vec!["ida", "idb"]);

    let mut episode_searches = state.episode_searches.clone();
    episode_searches.sort();
    assert_eq!(episode_searches, vec!["Artist A", "Artist B"]);

    // Artist A: first three of five tracks, in order, then a single episode
    assert!(state.added_batches.contains(&vec![
        "spotify:track:t1".to_string(),
        "spotify:track:t2".to_string(),
        "spotify:track:t3".to_string(),
    ]));
    assert!(
        state
            .added_batches
            .contains(&vec!["spotify:episode:ep1".to_string()])
    );

    // Artist B: the episode is appended even though no tracks were found -
    // the podcast attempt is independent of the track-adding outcome
    assert!(
        state
            .added_batches
            .contains(&vec!["spotify:episode:epb".to_string()])
    );

    // No empty track batch was appended for Artist B, and nothing else either
    assert_eq!(state.added_batches.len(), 3);
}
