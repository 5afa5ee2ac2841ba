use crate::{cli::Context, info, success, warning};

/// Prints the authorization URL, tries to open it in the default browser and
/// explains how to hand the returned code back to the program.
pub fn show_auth_url(ctx: &Context) {
    let auth_url = ctx.token_manager().authorization_url();

    info!("Please visit this URL to authorize the application:\n{}", auth_url);
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    info!(
        "After authorizing, you will be redirected to a URL like:\n{}?code=AQD...long-code-here...",
        ctx.config().redirect_uri
    );
    info!(
        "Copy the entire code parameter value (everything after 'code=') and run:\n{} --code YOUR_AUTHORIZATION_CODE",
        env!("CARGO_PKG_NAME")
    );
}

/// Exchanges `code` for a token and stores it. Returns whether it worked.
pub async fn submit_code(ctx: &Context, code: &str) -> bool {
    match ctx.token_manager().exchange_code(code.trim()).await {
        Ok(_) => {
            success!(
                "Authorization successful! Token saved to {}",
                ctx.paths().token_file.display()
            );
            true
        }
        Err(e) => {
            warning!("Error getting access token: {}", e);
            false
        }
    }
}
