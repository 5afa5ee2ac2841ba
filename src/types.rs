use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
    /// Unix timestamp of the exchange or the latest refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obtained_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Artist reference embedded in albums and tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTracks {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub tracks: PlaylistTracks,
    // `null` for playlists without artwork
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            next: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchArtistsResponse {
    #[serde(default)]
    pub artists: Paging<Artist>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReleasesResponse {
    #[serde(default)]
    pub albums: Paging<Album>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Outcome of the related-artists lookup.
///
/// `Unavailable` means the API answered 404 for the artist. Any other failure
/// ends up as an empty `Available` list.
#[derive(Debug, Clone, PartialEq)]
pub enum RelatedArtists {
    Available(Vec<Artist>),
    Unavailable,
}

impl RelatedArtists {
    pub fn artists(&self) -> &[Artist] {
        match self {
            RelatedArtists::Available(artists) => artists,
            RelatedArtists::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, RelatedArtists::Unavailable)
    }
}

/// An artist profile joined with the results of its dependent lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub artist: Artist,
    pub top_tracks: Vec<Track>,
    pub albums: Vec<Album>,
    pub related_artists: RelatedArtists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalTrack {
    pub name: String,
    pub album: String,
    pub popularity: u32,
    pub spotify_url: Option<String>,
    pub preview_url: Option<String>,
    pub album_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalAlbum {
    pub name: String,
    pub release_date: String,
    pub image_url: Option<String>,
    pub spotify_url: Option<String>,
}

/// The part of an [`ArtistRecord`] that is shown to the user and archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimalArtistRecord {
    pub id: String,
    pub name: String,
    pub spotify_url: Option<String>,
    pub popularity: u32,
    pub followers: u64,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub top_tracks: Vec<MinimalTrack>,
    pub albums: Vec<MinimalAlbum>,
    pub related_artists: Vec<String>,
}

/// Saved artists keyed by display name.
pub type ArtistArchive = BTreeMap<String, MinimalArtistRecord>;

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub popularity: String,
    pub followers: String,
    pub genres: String,
    pub image: String,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub genres: String,
    pub popularity: u32,
    pub spotify: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub tracks: u64,
    pub public: String,
    pub collaborative: bool,
    pub image: String,
}
