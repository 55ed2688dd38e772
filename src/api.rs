//! HTTP API
//!
//! TigerStyle: handlers only translate. Every decision about ordering and
//! lookup lives in `AlbumService`.
//!
//! Routes (all behind the `Authorization` check):
//! - `GET  /albums`      every album, id order
//! - `GET  /albums/:id`  one album or 404
//! - `POST /albums`      store an album, 201 with the stored copy

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_core::{
    Album, AlbumService, ErrorMessage, ALBUMS_PATH, ALBUM_BY_ID_PATH, UNAUTHORIZED_MESSAGE,
};
use serde::Serialize;

// =============================================================================
// State
// =============================================================================

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog façade
    pub service: AlbumService,
    /// Expected `Authorization` header value
    pub secret_key: Arc<str>,
}

impl AppState {
    /// Create handler state.
    pub fn new(service: AlbumService, secret_key: &str) -> Self {
        Self {
            service,
            secret_key: Arc::from(secret_key),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ALBUMS_PATH, get(list_albums).post(create_album))
        .route(ALBUM_BY_ID_PATH, get(get_album))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_authorization,
        ))
        .with_state(state)
}

// =============================================================================
// Responses
// =============================================================================

/// JSON body rendered with two-space indentation.
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

type ApiError = (StatusCode, IndentedJson<ErrorMessage>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, IndentedJson(ErrorMessage::new(message)))
}

// =============================================================================
// Middleware
// =============================================================================

async fn require_authorization(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if provided != Some(&*state.secret_key) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejecting request with invalid Authorization header"
        );
        return api_error(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE).into_response();
    }

    next.run(request).await
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_albums(State(state): State<AppState>) -> IndentedJson<Vec<Album>> {
    IndentedJson(state.service.list().await)
}

async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<IndentedJson<Album>, ApiError> {
    match state.service.get_by_id(&id).await {
        Ok(album) => Ok(IndentedJson(album)),
        Err(e) => {
            tracing::debug!(album_id = %id, "Album not found");
            Err((StatusCode::NOT_FOUND, IndentedJson(ErrorMessage::from(&e))))
        }
    }
}

async fn create_album(
    State(state): State<AppState>,
    body: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, IndentedJson<Album>), ApiError> {
    let Json(album) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected album body");
        api_error(rejection.status(), rejection.body_text())
    })?;

    let stored = state.service.create(album).await;
    tracing::info!(album_id = %stored.id, title = %stored.title, "Created album");

    Ok((StatusCode::CREATED, IndentedJson(stored)))
}

// =============================================================================
// Tests
// =============================================================================
