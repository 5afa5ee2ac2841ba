use reqwest::StatusCode;

use crate::{
    spotify::{ApiError, SpotifyClient},
    types::{Paging, Playlist},
};

impl SpotifyClient {
    /// Probes `GET /me` and returns only the status code.
    ///
    /// This is the lightest authenticated call available and serves as the
    /// token liveness check. A `401 Unauthorized` means the access token has
    /// expired or was revoked; every other status says nothing about the token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when no status was received at all.
    pub async fn current_user_status(&self, token: &str) -> Result<StatusCode, ApiError> {
        let response = self.get_raw("me", token, &[]).await?;
        Ok(response.status)
    }

    /// Retrieves the current user's playlists.
    ///
    /// Calls `GET /me/playlists?limit={limit}` and returns the first page,
    /// which includes playlists the user owns, follows and collaborates on
    /// (subject to the `playlist-read-*` scopes).
    pub async fn current_user_playlists(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<Playlist>, ApiError> {
        let limit = limit.to_string();
        let res: Paging<Playlist> = self
            .get_json("me/playlists", token, &[("limit", limit.as_str())])
            .await?;
        Ok(res.items)
    }
}
