use std::sync::Arc;

use crate::{
    management::{Store, StoreError},
    types::{ArtistArchive, ArtistRecord, MinimalAlbum, MinimalArtistRecord, MinimalTrack},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(String),
    /// An entry with this name already existed and was left untouched.
    Skipped(String),
}

impl From<&ArtistRecord> for MinimalArtistRecord {
    fn from(record: &ArtistRecord) -> Self {
        let artist = &record.artist;
        MinimalArtistRecord {
            id: artist.id.clone(),
            name: artist.name.clone(),
            spotify_url: artist.external_urls.spotify.clone(),
            popularity: artist.popularity,
            followers: artist.followers.total,
            genres: artist.genres.clone(),
            image_url: utils::first_image_url(&artist.images),
            top_tracks: record
                .top_tracks
                .iter()
                .map(|track| MinimalTrack {
                    name: track.name.clone(),
                    album: track.album.name.clone(),
                    popularity: track.popularity,
                    spotify_url: track.external_urls.spotify.clone(),
                    preview_url: track.preview_url.clone(),
                    album_image_url: utils::first_image_url(&track.album.images),
                })
                .collect(),
            albums: record
                .albums
                .iter()
                .map(|album| MinimalAlbum {
                    name: album.name.clone(),
                    release_date: album.release_date.clone(),
                    image_url: utils::first_image_url(&album.images),
                    spotify_url: album.external_urls.spotify.clone(),
                })
                .collect(),
            related_artists: record
                .related_artists
                .artists()
                .iter()
                .map(|related| related.name.clone())
                .collect(),
        }
    }
}

pub struct ArtistArchiveManager {
    store: Arc<dyn Store<ArtistArchive>>,
}

impl ArtistArchiveManager {
    pub fn new(store: Arc<dyn Store<ArtistArchive>>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<ArtistArchive, StoreError> {
        Ok(self.store.load().await?.unwrap_or_default())
    }

    /// Archives the minimal form of `record` under the artist name. The first
    /// save of a name wins; later ones are reported as skipped.
    pub async fn reduce_and_persist(&self, record: &ArtistRecord) -> Result<SaveOutcome, StoreError> {
        let minimal = MinimalArtistRecord::from(record);
        let mut archive = self.load().await?;

        if archive.contains_key(&minimal.name) {
            return Ok(SaveOutcome::Skipped(minimal.name));
        }

        let name = minimal.name.clone();
        archive.insert(name.clone(), minimal);
        self.store.save(&archive).await?;
        Ok(SaveOutcome::Saved(name))
    }

    pub async fn names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.load().await?.into_keys().collect())
    }
}
