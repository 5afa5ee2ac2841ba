use spotexp::types::{Album, Image};
use spotexp::utils::*;

// Helper function to create a test album
fn create_test_album(id: &str, name: &str, release_date: &str) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        release_date: release_date.to_string(),
        album_type: "album".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_remove_duplicate_albums_by_name() {
    let mut albums = vec![
        create_test_album("1", "A", "2020-01-01"),
        create_test_album("2", "B", "2021-01-01"),
        create_test_album("3", "A", "2022-06-30"),
    ];

    remove_duplicate_albums_by_name(&mut albums);

    // First occurrence wins, order preserved
    let kept: Vec<(&str, &str)> = albums
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();
    assert_eq!(kept, [("1", "A"), ("2", "B")]);
}

#[test]
fn test_remove_duplicate_albums_is_case_sensitive() {
    let mut albums = vec![
        create_test_album("1", "Dummy", "1994-08-22"),
        create_test_album("2", "dummy", "1994-08-22"),
    ];

    remove_duplicate_albums_by_name(&mut albums);
    assert_eq!(albums.len(), 2);

    let mut empty: Vec<Album> = Vec::new();
    remove_duplicate_albums_by_name(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_first_image_url() {
    let images = vec![
        Image {
            url: "https://i.test/large.jpg".to_string(),
            height: Some(640),
            width: Some(640),
        },
        Image {
            url: "https://i.test/small.jpg".to_string(),
            height: Some(64),
            width: Some(64),
        },
    ];

    assert_eq!(
        first_image_url(&images).as_deref(),
        Some("https://i.test/large.jpg")
    );
    assert_eq!(first_image_url(&[]), None);
}

#[test]
fn test_join_genres() {
    assert_eq!(join_genres(&[]), "N/A");
    assert_eq!(join_genres(&["trip hop".to_string()]), "trip hop");
    assert_eq!(
        join_genres(&["trip hop".to_string(), "bristol sound".to_string()]),
        "trip hop, bristol sound"
    );
}

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(0), "0");
    assert_eq!(format_thousands(999), "999");
    assert_eq!(format_thousands(1_000), "1,000");
    assert_eq!(format_thousands(1_234_567), "1,234,567");
    assert_eq!(format_thousands(100_000_000), "100,000,000");
}

#[test]
fn test_parse_selection() {
    assert_eq!(parse_selection("3"), Some(3));
    assert_eq!(parse_selection("  2 \n"), Some(2));
    assert_eq!(parse_selection("0"), Some(0));
    assert_eq!(parse_selection(""), None);
    assert_eq!(parse_selection("two"), None);
    assert_eq!(parse_selection("-1"), None);
}

#[test]
fn test_token_preview() {
    assert_eq!(token_preview("BQDabcdefghijk", 10), "BQDabcdefg");
    assert_eq!(token_preview("short", 10), "short");
    assert_eq!(token_preview("", 10), "");
}
