use crate::{
    cli::{Context, display},
    info, utils, warning,
};

pub const PLAYLISTS_LIMIT: u32 = 50;

pub async fn list_playlists(ctx: &Context) -> bool {
    let Some(token) = ctx.token_manager().get_valid_token().await else {
        return false;
    };

    let pb = utils::spinner("Getting your playlists...");
    let result = ctx
        .client()
        .current_user_playlists(&token, PLAYLISTS_LIMIT)
        .await;
    pb.finish_and_clear();

    let playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Error getting playlists: {}", e);
            Vec::new()
        }
    };

    info!("Found {} playlists", playlists.len());
    display::playlists(&playlists);
    true
}
