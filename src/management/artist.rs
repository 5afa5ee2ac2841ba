use std::collections::HashSet;

use log::debug;

use crate::{
    info,
    spotify::SpotifyClient,
    types::{Artist, ArtistRecord, RelatedArtists},
    utils, warning,
};

pub const SEARCH_LIMIT: u32 = 5;
pub const TOP_TRACKS_LIMIT: usize = 5;
pub const RELATED_ARTISTS_LIMIT: usize = 5;
pub const ALBUM_GROUPS: &str = "album";
pub const ALBUM_PAGE_SIZE: u32 = 10;
pub const ALBUM_LIMIT: usize = 2;
pub const NEW_RELEASES_LIMIT: u32 = 20;
pub const POPULAR_ARTISTS_LIMIT: usize = 10;

/// Picks one artist out of the search candidates.
pub trait ArtistChooser {
    /// Returns the 1-based position of the selected candidate, or `None` when
    /// no more input can be read. Out-of-range answers are asked again.
    fn choose(&mut self, candidates: &[Artist]) -> Option<usize>;
}

pub struct ArtistAggregator {
    client: SpotifyClient,
    market: String,
}

impl ArtistAggregator {
    pub fn new(client: SpotifyClient, market: impl Into<String>) -> Self {
        Self {
            client,
            market: market.into(),
        }
    }

    /// Searches `query`, lets `chooser` pick one match and joins the artist's
    /// top tracks, related artists and albums into one record.
    ///
    /// Returns `None` when the search fails, finds nothing, or the chooser
    /// runs out of input. Failures of the sub-lookups only empty their part.
    pub async fn search_and_enrich(
        &self,
        token: &str,
        query: &str,
        chooser: &mut dyn ArtistChooser,
    ) -> Option<ArtistRecord> {
        info!("Searching for artist: {}...", query);
        let mut candidates = match self.client.search_artists(token, query, SEARCH_LIMIT).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warning!("Error searching for artist: {}", e);
                return None;
            }
        };

        if candidates.is_empty() {
            warning!("No artists found matching '{}'", query);
            return None;
        }

        let index = loop {
            let selection = chooser.choose(&candidates)?;
            if (1..=candidates.len()).contains(&selection) {
                break selection - 1;
            }
            warning!("Invalid selection. Try again.");
        };

        let artist = candidates.swap_remove(index);
        info!("You selected: {} (ID: {})", artist.name, artist.id);

        info!("Getting top tracks for {}...", artist.name);
        let top_tracks = match self
            .client
            .artist_top_tracks(token, &artist.id, &self.market)
            .await
        {
            Ok(mut tracks) => {
                tracks.truncate(TOP_TRACKS_LIMIT);
                tracks
            }
            Err(e) => {
                warning!("Error getting top tracks: {}", e);
                Vec::new()
            }
        };

        info!("Getting related artists for {}...", artist.name);
        // Errors other than 404 land in the same bucket as an empty answer.
        let related_artists = match self.client.related_artists(token, &artist.id).await {
            Ok(mut related) => {
                related.truncate(RELATED_ARTISTS_LIMIT);
                RelatedArtists::Available(related)
            }
            Err(e) if e.is_not_found() => {
                warning!("Related artists are not available for this artist.");
                RelatedArtists::Unavailable
            }
            Err(e) => {
                warning!("Error getting related artists: {}", e);
                RelatedArtists::Available(Vec::new())
            }
        };

        info!("Getting albums for {}...", artist.name);
        let albums = match self
            .client
            .artist_albums(token, &artist.id, ALBUM_GROUPS, ALBUM_PAGE_SIZE)
            .await
        {
            Ok(mut albums) => {
                utils::remove_duplicate_albums_by_name(&mut albums);
                albums.truncate(ALBUM_LIMIT);
                albums
            }
            Err(e) => {
                warning!("Error getting albums: {}", e);
                Vec::new()
            }
        };

        Some(ArtistRecord {
            artist,
            top_tracks,
            albums,
            related_artists,
        })
    }

    /// Collects up to `limit` distinct artists credited on new releases, in
    /// release order, with their full profiles.
    ///
    /// An artist whose profile cannot be fetched is skipped.
    pub async fn popular_artists(&self, token: &str, limit: usize) -> Vec<Artist> {
        let albums = match self
            .client
            .new_releases(token, NEW_RELEASES_LIMIT, &self.market)
            .await
        {
            Ok(albums) => albums,
            Err(e) => {
                warning!("Error getting new releases: {}", e);
                return Vec::new();
            }
        };
        debug!("Found {} new release albums", albums.len());

        let mut seen = HashSet::new();
        let mut artists = Vec::new();

        for reference in albums.iter().flat_map(|album| album.artists.iter()) {
            if artists.len() >= limit {
                break;
            }
            if !seen.insert(reference.id.clone()) {
                continue;
            }

            match self.client.artist(token, &reference.id).await {
                Ok(artist) => {
                    debug!("Got details for artist: {}", artist.name);
                    artists.push(artist);
                }
                Err(e) => warning!("Error getting details for {}: {}", reference.name, e),
            }
        }

        artists
    }
}
