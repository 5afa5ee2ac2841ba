use std::sync::Arc;

use spotexp::{
    management::{ArtistArchiveManager, JsonFileStore, MemoryStore, SaveOutcome, Store, StoreError},
    types::{
        Album, Artist, ArtistArchive, ArtistRecord, ExternalUrls, Followers, Image,
        MinimalArtistRecord, RelatedArtists, Track, TrackAlbum,
    },
};

fn image(url: &str) -> Image {
    Image {
        url: url.to_string(),
        height: Some(640),
        width: Some(640),
    }
}

fn spotify_url(url: &str) -> ExternalUrls {
    ExternalUrls {
        spotify: Some(url.to_string()),
    }
}

fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        popularity: 64,
        followers: Followers { total: 2_500_000 },
        genres: vec!["art pop".to_string(), "icelandic pop".to_string()],
        images: vec![image("https://i.test/artist-1.jpg"), image("https://i.test/artist-2.jpg")],
        external_urls: spotify_url(&format!("https://open.spotify.com/artist/{id}")),
    }
}

fn record(id: &str, name: &str, related_artists: RelatedArtists) -> ArtistRecord {
    ArtistRecord {
        artist: artist(id, name),
        top_tracks: vec![Track {
            name: "Jóga".to_string(),
            popularity: 58,
            preview_url: None,
            external_urls: spotify_url("https://open.spotify.com/track/t1"),
            album: TrackAlbum {
                name: "Homogenic".to_string(),
                images: vec![image("https://i.test/homogenic.jpg")],
            },
        }],
        albums: vec![Album {
            id: "al1".to_string(),
            name: "Vespertine".to_string(),
            release_date: "2001-08-27".to_string(),
            album_type: "album".to_string(),
            images: vec![],
            external_urls: spotify_url("https://open.spotify.com/album/al1"),
            artists: vec![],
        }],
        related_artists,
    }
}

fn memory_archive(initial: Option<ArtistArchive>) -> (ArtistArchiveManager, Arc<MemoryStore<ArtistArchive>>) {
    let store = Arc::new(MemoryStore::new(initial));
    (ArtistArchiveManager::new(store.clone()), store)
}

#[test]
fn test_minimal_projection_keeps_display_fields() {
    let related = RelatedArtists::Available(vec![artist("s1", "Sigur Rós"), artist("m1", "Múm")]);
    let minimal = MinimalArtistRecord::from(&record("b1", "Björk", related));

    assert_eq!(minimal.id, "b1");
    assert_eq!(minimal.name, "Björk");
    assert_eq!(minimal.popularity, 64);
    assert_eq!(minimal.followers, 2_500_000);
    assert_eq!(minimal.image_url.as_deref(), Some("https://i.test/artist-1.jpg"));
    assert_eq!(
        minimal.spotify_url.as_deref(),
        Some("https://open.spotify.com/artist/b1")
    );

    let track = &minimal.top_tracks[0];
    assert_eq!(track.name, "Jóga");
    assert_eq!(track.album, "Homogenic");
    assert_eq!(track.popularity, 58);
    assert_eq!(track.preview_url, None);
    assert_eq!(track.album_image_url.as_deref(), Some("https://i.test/homogenic.jpg"));

    let album = &minimal.albums[0];
    assert_eq!(album.name, "Vespertine");
    assert_eq!(album.release_date, "2001-08-27");
    assert_eq!(album.image_url, None);

    // Related artists are reduced to their names
    assert_eq!(minimal.related_artists, vec!["Sigur Rós", "Múm"]);
}

#[test]
fn test_unavailable_related_artists_project_to_empty_list() {
    let minimal = MinimalArtistRecord::from(&record("b1", "Björk", RelatedArtists::Unavailable));
    assert!(minimal.related_artists.is_empty());
}

#[tokio::test]
async fn test_first_save_wins() {
    let (archive, store) = memory_archive(None);

    let first = record("b1", "Björk", RelatedArtists::Available(vec![]));
    let outcome = archive.reduce_and_persist(&first).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Saved("Björk".to_string()));

    // Same name, different id: rejected and the stored entry left as it was
    let second = record("b2", "Björk", RelatedArtists::Unavailable);
    let outcome = archive.reduce_and_persist(&second).await.unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped("Björk".to_string()));

    let saved = store.snapshot().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved["Björk"].id, "b1");
}

#[tokio::test]
async fn test_save_keeps_existing_entries() {
    let (archive, store) = memory_archive(None);

    for (id, name) in [("p1", "Portishead"), ("b1", "Björk"), ("m1", "Massive Attack")] {
        let outcome = archive
            .reduce_and_persist(&record(id, name, RelatedArtists::Available(vec![])))
            .await
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(name.to_string()));
    }

    assert_eq!(store.snapshot().unwrap().len(), 3);
    assert_eq!(
        archive.names().await.unwrap(),
        vec!["Björk", "Massive Attack", "Portishead"]
    );
}

#[tokio::test]
async fn test_missing_archive_loads_empty() {
    let (archive, _) = memory_archive(None);
    assert!(archive.load().await.unwrap().is_empty());
    assert!(archive.names().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_archive_writes_indented_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("saved-artists.json");
    let archive = ArtistArchiveManager::new(Arc::new(JsonFileStore::new(&path)));

    archive
        .reduce_and_persist(&record("b1", "Björk", RelatedArtists::Available(vec![])))
        .await
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Björk\""));
    assert!(!text.contains("\\u00f6"));
    assert!(text.contains("\n  \"Björk\": {\n    \"id\": \"b1\""));

    // A second manager on the same file sees the saved entry
    let reopened = ArtistArchiveManager::new(Arc::new(JsonFileStore::new(&path)));
    let outcome = reopened
        .reduce_and_persist(&record("b9", "Björk", RelatedArtists::Unavailable))
        .await
        .unwrap();
    assert_eq!(outcome, SaveOutcome::Skipped("Björk".to_string()));
}

#[tokio::test]
async fn test_file_store_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store: JsonFileStore<ArtistArchive> = JsonFileStore::new(dir.path().join("absent.json"));

    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store: JsonFileStore<ArtistArchive> = JsonFileStore::new(&path);

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StoreError::Serde { .. }));
    assert!(err.to_string().contains("token.json"));
}
