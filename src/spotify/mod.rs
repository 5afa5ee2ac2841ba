//! # Spotify Integration Module
//!
//! This module is the integration layer between spotexp and the Spotify Web
//! API. It owns the HTTP seam ([`Transport`]), the typed client built on top of
//! it ([`SpotifyClient`]) and the raw OAuth token endpoint helpers.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! SpotifyClient (typed endpoints, status policy)
//!     ├── auth     (authorize URL, token endpoint)
//!     ├── artists  (search, artist, top tracks, related, albums)
//!     ├── browse   (new releases)
//!     └── user     (current user probe, playlists)
//!          ↓
//! Transport (reqwest in production, scripted fakes in tests)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Status Policy
//!
//! Every resource call treats HTTP 200 as the only success. Any other status is
//! returned as [`ApiError::Status`] carrying the status code and the decoded
//! error body, and the caller decides what that means: the artist aggregator
//! substitutes empty defaults, the related-artists lookup singles out 404, and
//! the token manager only cares about 401 from the probe. No call is retried.
//!
//! ## API Coverage
//!
//! - `GET /search` - Artist search
//! - `GET /artists/{id}` - Full artist profile
//! - `GET /artists/{id}/top-tracks` - Top tracks in a market
//! - `GET /artists/{id}/related-artists` - Similar artists
//! - `GET /artists/{id}/albums` - Discography filtered by release group
//! - `GET /browse/new-releases` - New album releases
//! - `GET /me` - Current user, used as token liveness probe
//! - `GET /me/playlists` - Current user's playlists
//! - `POST /api/token` - Code exchange and refresh (accounts service)

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod artists;
pub mod auth;
pub mod browse;
pub mod user;

/// Errors returned by a single Spotify API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or protocol failure before a status code was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status other than 200.
    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: Value },

    /// A success response whose body does not have the expected shape.
    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            ApiError::Json(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Status code and decoded JSON body of one HTTP exchange.
///
/// Empty bodies decode to `Value::Null`; non-JSON error bodies are kept as a
/// `Value::String`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

/// The HTTP seam used by every Spotify call.
///
/// Implementations perform exactly one request per call and never interpret
/// the status code; that is left to [`SpotifyClient`] and the token manager.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `GET url?query` with `Authorization: Bearer <bearer_token>`.
    async fn get(
        &self,
        url: &str,
        bearer_token: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError>;

    /// Sends a form-encoded `POST` with the given `Authorization` header value.
    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError>;
}

/// [`Transport`] backed by a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        bearer_token: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .query(query)
            .send()
            .await?;
        read_response(response).await
    }

    async fn post_form(
        &self,
        url: &str,
        authorization: &str,
        form: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .form(form)
            .send()
            .await?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(ApiError::Json(e)),
            Err(_) => Value::String(text),
        }
    };

    Ok(ApiResponse { status, body })
}

/// Typed access to the Spotify Web API.
///
/// Cheap to clone; clones share the same transport. Endpoint methods live in
/// the `artists`, `browse` and `user` submodules as separate `impl` blocks.
#[derive(Clone)]
pub struct SpotifyClient {
    transport: Arc<dyn Transport>,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client for `api_url` (e.g. `https://api.spotify.com/v1`).
    pub fn new(transport: Arc<dyn Transport>, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Sends an authenticated GET and returns the raw response without
    /// applying the status policy.
    pub async fn get_raw(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint(path);
        let response = self.transport.get(&url, token, query).await?;
        debug!("GET {} -> {}", url, response.status);
        Ok(response)
    }

    /// Sends an authenticated GET and decodes a 200 response into `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Status`] for any status other than 200
    /// - [`ApiError::Json`] when the body does not decode into `T`
    /// - [`ApiError::Http`] for transport failures
    pub async fn get_json<T>(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.get_raw(path, token, query).await?;
        if response.status != StatusCode::OK {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_value(response.body)?)
    }
}
