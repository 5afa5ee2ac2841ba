use colored::Colorize;

use crate::{
    cli::{Context, artists, playlist, prompt},
    info, warning,
};

/// Interactive loop over the query commands. Ends on "4" or closed stdin.
pub async fn menu(ctx: &Context) {
    loop {
        println!("\n{}", "===== SPOTIFY API EXPLORER =====".bold());
        println!("1. Get popular artists");
        println!("2. View your playlists");
        println!("3. Search for an artist (detailed info)");
        println!("4. Exit");

        let Some(choice) = prompt::read_line("\nEnter your choice (1-4): ") else {
            info!("Goodbye!");
            break;
        };

        match choice.trim() {
            "1" => {
                artists::popular_artists(ctx).await;
            }
            "2" => {
                playlist::list_playlists(ctx).await;
            }
            "3" => {
                artists::search_artist(ctx, None).await;
            }
            "4" => {
                info!("Goodbye!");
                break;
            }
            _ => warning!("Invalid choice. Please try again."),
        }
    }
}
