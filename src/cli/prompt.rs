use std::io::{self, Write};

use crate::{cli::display, management::ArtistChooser, types::Artist, utils, warning};

/// Prints `prompt` and reads one line from stdin without the line ending.
/// Returns `None` once stdin is closed or unreadable.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Console [`ArtistChooser`]: lists the candidates once and reads a number.
#[derive(Default)]
pub struct StdinChooser {
    listed: Vec<String>,
}

impl StdinChooser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtistChooser for StdinChooser {
    fn choose(&mut self, candidates: &[Artist]) -> Option<usize> {
        let ids: Vec<String> = candidates.iter().map(|a| a.id.clone()).collect();
        if ids != self.listed {
            display::candidates(candidates);
            self.listed = ids;
        }

        loop {
            let line = read_line(&format!(
                "\nSelect the correct artist (1-{}): ",
                candidates.len()
            ))?;
            match utils::parse_selection(&line) {
                Some(selection) => return Some(selection),
                None => warning!("Please enter a valid number."),
            }
        }
    }
}
