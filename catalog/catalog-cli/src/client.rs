//! HTTP Client
//!
//! Thin wrapper over `reqwest` for the two calls the CLI makes.

use catalog_core::{Album, ErrorMessage, ALBUMS_PATH};
use reqwest::StatusCode;

use crate::config::ClientConfig;

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },

    #[error("unexpected response from server (status {status})")]
    UnexpectedResponse { status: StatusCode },
}

/// Talks to a catalog server
#[derive(Debug, Clone)]
pub struct AlbumClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AlbumClient {
    /// Create a client for the configured server.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every album.
    pub async fn list_albums(&self) -> Result<Vec<Album>, ClientError> {
        let url = self.config.url(ALBUMS_PATH);
        tracing::debug!(%url, "Listing albums");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &self.config.secret_key)
            .send()
            .await?;

        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// Create an album and return the server's copy of it.
    pub async fn create_album(&self, album: &Album) -> Result<Album, ClientError> {
        let url = self.config.url(ALBUMS_PATH);
        tracing::debug!(%url, album_id = %album.id, "Creating album");

        let response = self
            .http
            .post(url)
            .header(reqwest::header::AUTHORIZATION, &self.config.secret_key)
            .json(album)
            .send()
            .await?;

        let response = expect_status(response, StatusCode::CREATED).await?;
        Ok(response.json().await?)
    }
}

/// Pass the response through if it has the expected status, otherwise turn
/// its `{"error": ...}` body into a `ClientError`.
async fn expect_status(
    response: reqwest::Response,
    expected: StatusCode,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    match response.json::<ErrorMessage>().await {
        Ok(body) => Err(ClientError::Server {
            status,
            message: body.error,
        }),
        Err(e) => {
            tracing::warn!(%status, error = %e, "Error response had no error body");
            Err(ClientError::UnexpectedResponse { status })
        }
    }
}
