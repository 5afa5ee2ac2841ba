use crate::{
    spotify::{ApiError, SpotifyClient},
    types::{Album, NewReleasesResponse},
};

impl SpotifyClient {
    /// Retrieves newly released albums.
    ///
    /// Calls `GET /browse/new-releases?limit={limit}&country={country}`. Each
    /// album carries simplified artist references (id and name only); full
    /// profiles have to be fetched with [`SpotifyClient::artist`].
    ///
    /// # Arguments
    ///
    /// * `token` - Valid access token
    /// * `limit` - Number of albums (1-50)
    /// * `country` - ISO 3166-1 alpha-2 market code, e.g. `US`
    ///
    /// # Example
    ///
    /// ```
    /// let albums = client.new_releases(&token, 20, "US").await?;
    /// println!("Found {} new release albums", albums.len());
    /// ```
    pub async fn new_releases(
        &self,
        token: &str,
        limit: u32,
        country: &str,
    ) -> Result<Vec<Album>, ApiError> {
        let limit = limit.to_string();
        let res: NewReleasesResponse = self
            .get_json(
                "browse/new-releases",
                token,
                &[("limit", limit.as_str()), ("country", country)],
            )
            .await?;
        Ok(res.albums.items)
    }
}
