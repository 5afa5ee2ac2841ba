//! Configuration management for the Spotify API Explorer.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files and turns them into explicit values that are handed to the
//! rest of the application. Nothing below the command layer reads the process
//! environment on its own: the token manager receives a [`SpotifyConfig`] and
//! the stores receive the paths from [`AppPaths`].
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use reqwest::Url;
use thiserror::Error;

/// Name of the application directory below the platform data directory.
pub const APP_DIR: &str = "spotexp";

pub const DEFAULT_SCOPE: &str =
    "user-read-private user-read-email playlist-read-private playlist-read-collaborative";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "US";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {detail}")]
    InvalidUrl { key: &'static str, detail: String },
    #[error("cannot prepare configuration directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads environment variables from `.env` files.
///
/// Creates the application directory in the platform-specific local data
/// directory if it doesn't exist, then loads `spotexp/.env` from there followed
/// by a `.env` in the current working directory. Variables that are already
/// set are never overwritten, so the real environment always wins. Missing
/// `.env` files are not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotexp/.env`
/// - macOS: `~/Library/Application Support/spotexp/.env`
/// - Windows: `%LOCALAPPDATA%/spotexp/.env`
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the application directory cannot be created.
/// A `.env` file that exists but cannot be parsed is logged and otherwise
/// ignored.
///
/// # Example
///
/// ```
/// use spotexp::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        if let Err(e) = dotenv::from_path(&path) {
            log::warn!("Ignoring unreadable {}: {}", path.display(), e);
        }
    }

    if let Err(e) = dotenv::dotenv() {
        log::debug!("No .env in working directory: {}", e);
    }

    Ok(())
}

/// Returns the application data directory, e.g. `~/.local/share/spotexp`.
pub fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

/// Spotify credentials and endpoints used by the token manager and the API
/// client.
///
/// Built once at startup from the environment (see [`SpotifyConfig::from_env`])
/// and passed by value, which lets tests construct it from fixture credentials
/// with [`SpotifyConfig::from_lookup`] or a plain struct literal.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// `SPOTIFY_API_AUTH_CLIENT_ID` - application client id from the Spotify dashboard
    pub client_id: String,
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET` - application client secret
    pub client_secret: String,
    /// `SPOTIFY_API_REDIRECT_URI` - must match the URI registered for the application
    pub redirect_uri: String,
    /// `SPOTIFY_API_AUTH_SCOPE` - space separated permission scopes
    pub scope: String,
    /// `SPOTIFY_API_AUTH_URL` - authorization endpoint the user is sent to
    pub auth_url: Url,
    /// `SPOTIFY_API_TOKEN_URL` - token endpoint for code exchange and refresh
    pub token_url: String,
    /// `SPOTIFY_API_URL` - Web API base URL without trailing slash
    pub api_url: String,
    /// `SPOTIFY_API_MARKET` - market used for new releases and top tracks
    pub market: String,
}

impl SpotifyConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] when the client id, client secret or redirect
    ///   URI is not set (or empty)
    /// - [`ConfigError::InvalidUrl`] when one of the endpoint overrides is not
    ///   an absolute URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset, so an `.env` line like `SPOTIFY_API_URL=`
    /// falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let auth_url = get("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());
        let auth_url = Url::parse(&auth_url).map_err(|e| ConfigError::InvalidUrl {
            key: "SPOTIFY_API_AUTH_URL",
            detail: e.to_string(),
        })?;

        let token_url =
            get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        validate_url("SPOTIFY_API_TOKEN_URL", &token_url)?;

        let api_url = get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_url("SPOTIFY_API_URL", &api_url)?;

        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url,
            token_url,
            api_url: api_url.trim_end_matches('/').to_string(),
            market: get("SPOTIFY_API_MARKET").unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        })
    }
}

fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl {
            key,
            detail: e.to_string(),
        })
}

/// Locations of the token file and the saved-artist archive.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub token_file: PathBuf,
    pub archive_file: PathBuf,
}

impl AppPaths {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `SPOTEXP_TOKEN_FILE` and `SPOTEXP_ARCHIVE_FILE` override the defaults
    /// `<app dir>/cache/token.json` and `<app dir>/saved-artists.json`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            token_file: get("SPOTEXP_TOKEN_FILE")
                .unwrap_or_else(|| app_dir().join("cache").join("token.json")),
            archive_file: get("SPOTEXP_ARCHIVE_FILE")
                .unwrap_or_else(|| app_dir().join("saved-artists.json")),
        }
    }
}
