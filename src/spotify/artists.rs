use crate::{
    spotify::{ApiError, SpotifyClient},
    types::{
        Album, Artist, Paging, RelatedArtistsResponse, SearchArtistsResponse, Track,
        TopTracksResponse,
    },
};

impl SpotifyClient {
    /// Searches artists by free text.
    ///
    /// Calls `GET /search?q={query}&type=artist&limit={limit}` and returns the
    /// matches in the order Spotify ranks them.
    ///
    /// # Arguments
    ///
    /// * `token` - Valid access token
    /// * `query` - Free-text query, e.g. an artist name or a song title
    /// * `limit` - Maximum number of matches (1-50)
    ///
    /// # Example
    ///
    /// ```
    /// let artists = client.search_artists(&token, "radiohead", 5).await?;
    /// for artist in artists {
    ///     println!("{} ({})", artist.name, artist.popularity);
    /// }
    /// ```
    pub async fn search_artists(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Artist>, ApiError> {
        let limit = limit.to_string();
        let res: SearchArtistsResponse = self
            .get_json(
                "search",
                token,
                &[("q", query), ("type", "artist"), ("limit", limit.as_str())],
            )
            .await?;
        Ok(res.artists.items)
    }

    /// Retrieves the full profile of one artist via `GET /artists/{id}`.
    pub async fn artist(&self, token: &str, artist_id: &str) -> Result<Artist, ApiError> {
        self.get_json(&format!("artists/{artist_id}"), token, &[])
            .await
    }

    /// Retrieves an artist's top tracks in a market.
    ///
    /// Calls `GET /artists/{id}/top-tracks?market={market}`. Spotify returns up
    /// to ten tracks already ordered by popularity; the order is kept as is.
    pub async fn artist_top_tracks(
        &self,
        token: &str,
        artist_id: &str,
        market: &str,
    ) -> Result<Vec<Track>, ApiError> {
        let res: TopTracksResponse = self
            .get_json(
                &format!("artists/{artist_id}/top-tracks"),
                token,
                &[("market", market)],
            )
            .await?;
        Ok(res.tracks)
    }

    /// Retrieves artists similar to the given one.
    ///
    /// Calls `GET /artists/{id}/related-artists`. Spotify answers 404 for
    /// artists it has no related data for (and for applications that lost
    /// access to the endpoint); that case surfaces as an [`ApiError::Status`]
    /// for which [`ApiError::is_not_found`] is true.
    pub async fn related_artists(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<Vec<Artist>, ApiError> {
        let res: RelatedArtistsResponse = self
            .get_json(&format!("artists/{artist_id}/related-artists"), token, &[])
            .await?;
        Ok(res.artists)
    }

    /// Retrieves one page of an artist's releases.
    ///
    /// Calls `GET /artists/{id}/albums?include_groups={groups}&limit={limit}`.
    ///
    /// # Arguments
    ///
    /// * `include_groups` - Comma separated release groups: `album`, `single`,
    ///   `appears_on`, `compilation`
    /// * `limit` - Page size (1-50)
    pub async fn artist_albums(
        &self,
        token: &str,
        artist_id: &str,
        include_groups: &str,
        limit: u32,
    ) -> Result<Vec<Album>, ApiError> {
        let limit = limit.to_string();
        let res: Paging<Album> = self
            .get_json(
                &format!("artists/{artist_id}/albums"),
                token,
                &[("include_groups", include_groups), ("limit", limit.as_str())],
            )
            .await?;
        Ok(res.items)
    }
}
