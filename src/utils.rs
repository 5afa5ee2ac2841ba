use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Album, Image};

/// Drops albums whose name was already seen, keeping the first occurrence.
pub fn remove_duplicate_albums_by_name(albums: &mut Vec<Album>) {
    let mut seen_names = HashSet::new();
    albums.retain(|album| seen_names.insert(album.name.clone()));
}

pub fn first_image_url(images: &[Image]) -> Option<String> {
    images.first().map(|image| image.url.clone())
}

/// Joins genres with ", " or returns "N/A" when there are none.
pub fn join_genres(genres: &[String]) -> String {
    if genres.is_empty() {
        "N/A".to_string()
    } else {
        genres.join(", ")
    }
}

/// Formats a count with `,` as thousands separator, e.g. `1234567` -> `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a 1-based menu or list selection. Surrounding whitespace is ignored.
pub fn parse_selection(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()
}

/// Returns the first `len` characters of a token for log output.
pub fn token_preview(token: &str, len: usize) -> String {
    token.chars().take(len).collect()
}

pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
