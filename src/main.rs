use clap::{
    ArgGroup, CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotexp::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
#[command(group(
    ArgGroup::new("action")
        .args(["auth", "code", "artists", "playlists", "search", "menu", "completions"])
        .multiple(false)
))]
struct Cli {
    /// Show the Spotify authorization URL
    #[clap(long)]
    auth: bool,

    /// Exchange an authorization code for a token, then open the menu
    #[clap(long, value_name = "AUTH_CODE")]
    code: Option<String>,

    /// Get popular artists from the newest releases
    #[clap(long)]
    artists: bool,

    /// Get your playlists
    #[clap(long)]
    playlists: bool,

    /// Search for an artist and show detailed info (prompts when QUERY is omitted)
    #[clap(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    search: Option<String>,

    /// Show the interactive menu
    #[clap(long)]
    menu: bool,

    /// Print shell completions
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let args = Cli::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if !(args.auth || args.code.is_some() || args.artists || args.playlists || args.menu)
        && args.search.is_none()
    {
        let _ = Cli::command().print_help();
        return;
    }

    let ctx = match cli::Context::from_env() {
        Ok(ctx) => ctx,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    if args.auth {
        cli::show_auth_url(&ctx);
    } else if let Some(code) = args.code {
        if cli::submit_code(&ctx, &code).await {
            cli::menu(&ctx).await;
        }
    } else if args.artists {
        cli::popular_artists(&ctx).await;
    } else if args.playlists {
        cli::list_playlists(&ctx).await;
    } else if let Some(query) = args.search {
        cli::search_artist(&ctx, Some(query)).await;
    } else if args.menu {
        cli::menu(&ctx).await;
    }
}
