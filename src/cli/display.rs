use colored::Colorize;
use tabled::Table;

use crate::{
    info,
    types::{
        Artist, ArtistRecord, ArtistTableRow, CandidateTableRow, Playlist, PlaylistTableRow,
        RelatedArtists,
    },
    utils,
};

const NOT_AVAILABLE: &str = "N/A";

fn heading(title: &str) {
    println!("\n{}", format!("===== {title} =====").bold());
}

fn url_or_na(url: &Option<String>) -> &str {
    url.as_deref().unwrap_or(NOT_AVAILABLE)
}

pub fn popular_artists(artists: &[Artist]) {
    if artists.is_empty() {
        info!(
            "No artists found. The request may have failed or the new releases do not credit enough unique artists."
        );
        return;
    }

    heading("POPULAR SPOTIFY ARTISTS");
    let rows: Vec<ArtistTableRow> = artists
        .iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            position: i + 1,
            name: a.name.clone(),
            popularity: format!("{}/100", a.popularity),
            followers: utils::format_thousands(a.followers.total),
            genres: utils::join_genres(&a.genres),
            image: utils::first_image_url(&a.images).unwrap_or_else(|| "No image".to_string()),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub fn playlists(playlists: &[Playlist]) {
    if playlists.is_empty() {
        info!("No playlists found");
        return;
    }

    heading("YOUR PLAYLISTS");
    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .enumerate()
        .map(|(i, p)| PlaylistTableRow {
            position: i + 1,
            name: p.name.clone(),
            tracks: p.tracks.total,
            public: p
                .public
                .map(|public| public.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            collaborative: p.collaborative,
            image: p
                .images
                .as_deref()
                .and_then(utils::first_image_url)
                .unwrap_or_else(|| "No image".to_string()),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub fn candidates(artists: &[Artist]) {
    heading("SEARCH RESULTS");
    let rows: Vec<CandidateTableRow> = artists
        .iter()
        .enumerate()
        .map(|(i, a)| CandidateTableRow {
            position: i + 1,
            name: a.name.clone(),
            genres: utils::join_genres(&a.genres),
            popularity: a.popularity,
            spotify: url_or_na(&a.external_urls.spotify).to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub fn artist_details(record: &ArtistRecord) {
    let artist = &record.artist;
    let artist_url = url_or_na(&artist.external_urls.spotify);
    let artist_image = utils::first_image_url(&artist.images);

    heading(&format!("ARTIST DETAILS: {}", artist.name));
    println!("Popularity: {}/100", artist.popularity);
    println!("Followers: {}", utils::format_thousands(artist.followers.total));
    println!("Genres: {}", utils::join_genres(&artist.genres));
    println!("Spotify URL: {}", artist_url);
    match &artist_image {
        Some(url) => println!("Image: {}", url),
        None => println!("No artist image available."),
    }

    if !record.top_tracks.is_empty() {
        heading("TOP SONGS");
        for (i, track) in record.top_tracks.iter().enumerate() {
            println!("{}. {}", i + 1, track.name.bold());
            println!("   Spotify URL: {}", url_or_na(&track.external_urls.spotify));
            if let Some(url) = utils::first_image_url(&track.album.images) {
                println!("   Image: {}", url);
            }
            println!("   Popularity: {}", track.popularity);
            println!("   Album: {}", track.album.name);
            println!(
                "   Preview: {}",
                track.preview_url.as_deref().unwrap_or("Not available")
            );
        }
    }

    if record.albums.is_empty() {
        println!("\nNo albums available");
    } else {
        heading("TOP ALBUMS");
        for (i, album) in record.albums.iter().enumerate() {
            println!("{}. {}", i + 1, album.name.bold());
            println!("   Release date: {}", album.release_date);
            if let Some(url) = utils::first_image_url(&album.images) {
                println!("   Image: {}", url);
            }
            println!("   Spotify URL: {}", url_or_na(&album.external_urls.spotify));
        }
    }

    match &record.related_artists {
        RelatedArtists::Unavailable => println!(
            "\nSpotify does not provide similar artists for this artist (API limitation)."
        ),
        RelatedArtists::Available(related) if related.is_empty() => {
            println!("\nNo related artists available")
        }
        RelatedArtists::Available(related) => {
            heading("SIMILAR ARTISTS");
            for (i, rel) in related.iter().enumerate() {
                println!(
                    "{}. {} (Popularity: {}) - {}",
                    i + 1,
                    rel.name,
                    rel.popularity,
                    url_or_na(&rel.external_urls.spotify)
                );
            }
        }
    }

    heading("ARTIST ON TOUR & ABOUT INFO");
    match &artist_image {
        Some(url) => println!("Artist Image: {}", url),
        None => println!("No artist image available."),
    }
    println!("Visit the artist's official Spotify page for tour dates and biography:");
    println!("{}", artist_url);
    println!("Look for the 'On Tour' and 'About' sections on the Spotify page.");
}

pub fn saved_artists(names: &[String]) {
    if names.is_empty() {
        return;
    }

    heading("SAVED ARTISTS");
    for name in names {
        println!("  - {}", name);
    }
}
