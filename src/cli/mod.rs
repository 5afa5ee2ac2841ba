//! # CLI Module
//!
//! This module provides the command-line layer of spotexp. Every command
//! obtains a valid access token through the [`TokenManager`], runs one query
//! against the Spotify Web API and renders the result in the terminal.
//!
//! ## Commands
//!
//! - [`show_auth_url`] - Prints (and opens) the Spotify authorization URL
//! - [`submit_code`] - Exchanges the authorization code for a stored token
//! - [`popular_artists`] - Lists artists credited on the newest releases
//! - [`list_playlists`] - Lists the current user's playlists
//! - [`search_artist`] - Searches an artist, shows the enriched details and
//!   archives a minimal record of them
//! - [`menu`] - Interactive loop over the query commands
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (prompts, tables, status lines)
//!     ↓
//! Management Layer (token lifecycle, artist aggregation, archive)
//!     ↓
//! Spotify Layer (typed endpoints over a Transport)
//!     ↓
//! Network Layer (reqwest)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Commands never abort the process. A missing or unrecoverable token, a
//! failed search or a failed archive write is reported with `warning!` and the
//! command returns `false`, so the interactive menu keeps running.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotexp --auth                 # Open the authorization page
//! spotexp --code AQD...          # Store the token, then open the menu
//! spotexp --artists              # Popular artists from new releases
//! spotexp --playlists            # Your playlists
//! spotexp --search "Portishead"  # Artist details, saved to the archive
//! spotexp --menu                 # Interactive menu
//! ```

use std::sync::Arc;

use crate::{
    Res,
    config::{AppPaths, SpotifyConfig},
    management::{ArtistAggregator, ArtistArchiveManager, JsonFileStore, TokenManager},
    spotify::{HttpTransport, SpotifyClient, Transport},
};

mod artists;
mod auth;
mod display;
mod menu;
mod playlist;
mod prompt;

pub use artists::popular_artists;
pub use artists::search_artist;
pub use auth::show_auth_url;
pub use auth::submit_code;
pub use menu::menu;
pub use playlist::list_playlists;
pub use prompt::StdinChooser;

/// Configuration and shared API client for one run of the program.
pub struct Context {
    config: SpotifyConfig,
    paths: AppPaths,
    client: SpotifyClient,
}

impl Context {
    /// Builds the context from the environment with a reqwest transport.
    pub fn from_env() -> Res<Self> {
        let config = SpotifyConfig::from_env()?;
        let paths = AppPaths::from_env();
        let transport = HttpTransport::new()?;
        Ok(Self::new(config, paths, Arc::new(transport)))
    }

    pub fn new(config: SpotifyConfig, paths: AppPaths, transport: Arc<dyn Transport>) -> Self {
        let client = SpotifyClient::new(transport, config.api_url.clone());
        Self {
            config,
            paths,
            client,
        }
    }

    pub fn config(&self) -> &SpotifyConfig {
        &self.config
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn client(&self) -> &SpotifyClient {
        &self.client
    }

    pub fn token_manager(&self) -> TokenManager {
        TokenManager::new(
            self.config.clone(),
            self.client.clone(),
            Arc::new(JsonFileStore::new(self.paths.token_file.clone())),
        )
    }

    pub fn archive(&self) -> ArtistArchiveManager {
        ArtistArchiveManager::new(Arc::new(JsonFileStore::new(
            self.paths.archive_file.clone(),
        )))
    }

    pub fn aggregator(&self) -> ArtistAggregator {
        ArtistAggregator::new(self.client.clone(), self.config.market.clone())
    }
}
