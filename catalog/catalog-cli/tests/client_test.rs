//! Client against a stub server on an ephemeral port.

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use catalog_cli::{AlbumClient, ClientConfig, ClientError};
use catalog_core::{seed_albums, Album, ErrorMessage, UNAUTHORIZED_MESSAGE};

const SECRET: &str = "test-secret";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(SECRET)
}

fn unauthorized() -> (StatusCode, Json<ErrorMessage>) {
    (StatusCode::UNAUTHORIZED, Json(ErrorMessage::new(UNAUTHORIZED_MESSAGE)))
}

async fn list(headers: HeaderMap) -> Result<Json<Vec<Album>>, (StatusCode, Json<ErrorMessage>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    Ok(Json(seed_albums()))
}

async fn create(
    headers: HeaderMap,
    Json(album): Json<Album>,
) -> Result<(StatusCode, Json<Album>), (StatusCode, Json<ErrorMessage>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    Ok((StatusCode::CREATED, Json(album)))
}

/// Start `app` on 127.0.0.1:0 and return its root URL.
async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn stub_catalog() -> String {
    spawn_stub(Router::new().route("/albums", get(list).post(create))).await
}

fn client(root_url: String, secret_key: &str) -> AlbumClient {
    AlbumClient::new(
        ClientConfig::default().with_overrides(Some(root_url), Some(secret_key.to_string())),
    )
}

#[tokio::test]
async fn test_list_albums() {
    let root = stub_catalog().await;

    let albums = client(root, SECRET).list_albums().await.unwrap();
    assert_eq!(albums, seed_albums());
}

#[tokio::test]
async fn test_create_album_echoes() {
    let root = stub_catalog().await;
    let album = Album::new("424242", "Velvet Suite", "Nina Okafor", 23.45);

    let created = client(root, SECRET).create_album(&album).await.unwrap();
    assert_eq!(created, album);
}

#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let root = stub_catalog().await;

    let err = client(root, "wrong").list_albums().await.unwrap_err();
    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, UNAUTHORIZED_MESSAGE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_body_shape() {
    let app = Router::new().route(
        "/albums",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let root = spawn_stub(app).await;

    let err = client(root, SECRET).list_albums().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::UnexpectedResponse { status } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{}", addr), SECRET)
        .list_albums()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
