use axum::{Router, http::StatusCode, routing::get};

use gigmix::errors::ApiError;
use gigmix::http::{SUCCESS_CODES, make_request};
use gigmix::spotify::SpotifyClient;
use gigmix::types::SpotifyCredentials;

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn create_test_credentials() -> SpotifyCredentials {
    SpotifyCredentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        token: "token".to_string(),
    }
}

#[tokio::test]
async fn test_unsupported_method_fails_before_any_io() {
    // The URL points nowhere; the method check must reject first
    let result = make_request("put", "http://127.0.0.1:9/unreachable", None, None).await;

    assert!(matches!(result, Err(ApiError::UnsupportedMethod(m)) if m == "put"));
}

#[tokio::test]
async fn test_all_three_success_codes_are_accepted() {
    let app = Router::new()
        .route("/ok", get(|| async { (StatusCode::OK, "fine") }))
        .route("/created", get(|| async { (StatusCode::CREATED, "made") }))
        .route("/accepted", get(|| async { (StatusCode::ACCEPTED, "queued") }));
    let base = spawn_server(app).await;

    for path in ["ok", "created", "accepted"] {
        let response = make_request("get", &format!("{base}/{path}"), None, None)
            .await
            .unwrap();
        assert!(SUCCESS_CODES.contains(&response.status().as_u16()));
    }
}

#[tokio::test]
async fn test_request_failed_carries_status_and_body() {
    let app = Router::new().route(
        "/broken",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_server(app).await;

    let result = make_request("get", &format!("{base}/broken"), None, None).await;

    match result {
        Err(ApiError::RequestFailed { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_a_failure() {
    let app = Router::new();
    let base = spawn_server(app).await;

    let result = make_request("get", &format!("{base}/missing"), None, None).await;

    assert!(matches!(
        result,
        Err(ApiError::RequestFailed { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_unsupported_search_type() {
    // The type check happens before any request is issued
    let client = SpotifyClient::new(create_test_credentials());

    let result = client.search("Bruno Mars", "genre").await;

    assert!(matches!(result, Err(ApiError::UnsupportedSearchType(t)) if t == "genre"));
}
