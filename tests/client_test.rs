use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wordplaylist::{
    errors::CatalogError,
    spotify::{Catalog, SpotifyClient},
    types::{AddTracksRequest, CreatePlaylistRequest, ReleaseType},
};

const GOOD_TOKEN: &str = "Bearer good-token";

fn rejected() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": {"status": 401, "message": "The access token expired"}})),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == GOOD_TOKEN)
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return rejected();
    }
    Json(json!({"id": "listener-1", "display_name": "Listener", "country": "SE"})).into_response()
}

async fn search(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return rejected();
    }
    let q = params.get("q").cloned().unwrap_or_default();
    if q == "explode" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"status": 500, "message": "Server error"}})),
        )
            .into_response();
    }
    if params.get("type").map(String::as_str) != Some("track") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    Json(json!({
        "tracks": {
            "href": "ignored",
            "total": 2,
            "items": [
                {
                    "uri": "spotify:track:1",
                    "name": q,
                    "album": {"album_type": "single", "name": "Single"},
                    "artists": [{"name": "Alice"}, {"name": "Bob"}]
                },
                {
                    "uri": "spotify:track:2",
                    "name": "Deep Cut",
                    "album": {"album_type": "appears_on_something_new", "name": "?"},
                    "artists": [{"name": "Cara"}]
                }
            ]
        }
    }))
    .into_response()
}

async fn create_playlist(
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return rejected();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": format!("pl-for-{}", user_id),
            "name": body["name"],
            "description": body["description"],
            "public": body["public"],
            "snapshot_id": "snap-0",
            "external_urls": {"spotify": "https://open.spotify.com/playlist/pl"}
        })),
    )
        .into_response()
}

async fn add_tracks(
    headers: HeaderMap,
    Path(playlist_id): Path<String>,
    Json(body): Json<AddTracksRequest>,
) -> Response {
    if !authorized(&headers) {
        return rejected();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "snapshot_id": format!("{}-{}-{}", playlist_id, body.uris.len(), body.position)
        })),
    )
        .into_response()
}

async fn start_mock() -> String {
    let app = Router::new()
        .route("/v1/me", get(me))
        .route("/v1/search", get(search))
        .route("/v1/users/{user_id}/playlists", post(create_playlist))
        .route("/v1/playlists/{playlist_id}/tracks", post(add_tracks));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}

async fn client(token: Option<&str>) -> SpotifyClient {
    let mut client = SpotifyClient::with_base_url(start_mock().await);
    client.set_access_token(token.map(str::to_string));
    client
}

#[tokio::test]
async fn test_current_user_with_valid_token() {
    let client = client(Some("good-token")).await;

    let user = client.current_user().await.unwrap();
    assert_eq!(user.id, "listener-1");
    assert_eq!(user.display_name.as_deref(), Some("Listener"));
}

#[tokio::test]
async fn test_rejected_token_is_unauthorized() {
    let client = client(Some("expired-token")).await;

    assert_eq!(
        client.current_user().await,
        Err(CatalogError::Unauthorized)
    );
    assert_eq!(
        client.search_tracks("sun").await.err(),
        Some(CatalogError::Unauthorized)
    );
}

#[tokio::test]
async fn test_missing_token_never_reaches_the_network() {
    let client = SpotifyClient::with_base_url("http://127.0.0.1:9/v1");

    assert_eq!(
        client.current_user().await,
        Err(CatalogError::NotAuthenticated)
    );
}

#[tokio::test]
async fn test_search_encodes_query_and_decodes_release_types() {
    let client = client(Some("good-token")).await;

    let response = client.search_tracks("be my & valentine?").await.unwrap();
    let items = response.tracks.items;

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "be my & valentine?");
    assert_eq!(items[0].release_type(), &ReleaseType::Single);
    assert_eq!(items[0].artists.len(), 2);
    assert_eq!(items[1].release_type(), &ReleaseType::Other);
}

#[tokio::test]
async fn test_server_error_is_request_failed_with_message() {
    let client = client(Some("good-token")).await;

    assert_eq!(
        client.search_tracks("explode").await.err(),
        Some(CatalogError::RequestFailed {
            status: Some(500),
            message: "Server error".into(),
        })
    );
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed_without_status() {
    let mut client = SpotifyClient::with_base_url("http://127.0.0.1:9/v1");
    client.set_access_token(Some("good-token".into()));

    match client.search_tracks("sun").await {
        Err(CatalogError::RequestFailed { status: None, .. }) => {}
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_playlist_and_add_tracks() {
    let client = client(Some("good-token")).await;

    let playlist = client
        .create_playlist(
            "listener-1",
            &CreatePlaylistRequest {
                name: "Celestial".into(),
                description: Some("sun and moon".into()),
                public: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(playlist.id, "pl-for-listener-1");
    assert_eq!(playlist.name, "Celestial");
    assert_eq!(playlist.description.as_deref(), Some("sun and moon"));
    assert_eq!(playlist.public, Some(false));
    assert_eq!(
        playlist.web_url(),
        Some("https://open.spotify.com/playlist/pl")
    );

    let snapshot = client
        .add_tracks(
            &playlist.id,
            &AddTracksRequest {
                uris: vec!["spotify:track:1".into(), "spotify:track:2".into()],
                position: 0,
            },
        )
        .await
        .unwrap();

    assert_eq!(snapshot.snapshot_id, "pl-for-listener-1-2-0");
}

#[test]
fn test_trailing_slash_is_trimmed_from_base_url() {
    let client = SpotifyClient::with_base_url("http://localhost:9/v1/");
    assert_eq!(client.base_url(), "http://localhost:9/v1");
}
