use crate::{
    cli::{Context, display, prompt},
    info,
    management::{POPULAR_ARTISTS_LIMIT, SaveOutcome},
    success, utils, warning,
};

pub async fn popular_artists(ctx: &Context) -> bool {
    let Some(token) = ctx.token_manager().get_valid_token().await else {
        return false;
    };

    info!(
        "Requesting new releases with token: {}...",
        utils::token_preview(&token, 10)
    );
    let pb = utils::spinner("Fetching popular artists...");
    let artists = ctx
        .aggregator()
        .popular_artists(&token, POPULAR_ARTISTS_LIMIT)
        .await;
    pb.finish_and_clear();

    info!("Found {} unique artists", artists.len());
    display::popular_artists(&artists);
    true
}

/// Runs the enriched artist search. Prompts for the query when `query` is
/// `None` or blank, then archives the selected artist.
pub async fn search_artist(ctx: &Context, query: Option<String>) -> bool {
    let Some(token) = ctx.token_manager().get_valid_token().await else {
        return false;
    };

    let query = match query.filter(|q| !q.trim().is_empty()) {
        Some(q) => q,
        None => prompt::read_line("Enter an artist name or song title to search: ")
            .unwrap_or_default(),
    };
    let query = query.trim();
    if query.is_empty() {
        warning!("No search query provided");
        return false;
    }

    let mut chooser = prompt::StdinChooser::new();
    let Some(record) = ctx
        .aggregator()
        .search_and_enrich(&token, query, &mut chooser)
        .await
    else {
        return false;
    };

    display::artist_details(&record);

    let archive = ctx.archive();
    let archive_file = ctx.paths().archive_file.display();
    match archive.reduce_and_persist(&record).await {
        Ok(SaveOutcome::Saved(name)) => {
            success!("Saved artist '{}' to {} (minimal info only).", name, archive_file)
        }
        Ok(SaveOutcome::Skipped(name)) => warning!(
            "Artist '{}' already exists in {}, not saving duplicate.",
            name,
            archive_file
        ),
        Err(e) => warning!("Cannot save artist: {}", e),
    }

    match archive.names().await {
        Ok(names) => display::saved_artists(&names),
        Err(e) => warning!("Cannot read saved artists: {}", e),
    }

    true
}
