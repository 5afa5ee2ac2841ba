//! Spotify API Explorer Library
//!
//! This library provides the building blocks of the `spotexp` command-line tool:
//! an OAuth authorization-code login with cached and refreshed tokens, and a set
//! of read-only Spotify Web API queries (popular artists from new releases, user
//! playlists, and an enriched artist search whose results can be archived
//! locally).
//!
//! # Modules
//!
//! - `cli` - Command-line operations and terminal rendering
//! - `config` - Configuration management and environment variables
//! - `management` - Token lifecycle, artist aggregation and local persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotexp::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> spotexp::Res<()> {
//!     config::load_env().await?;
//!     let ctx = cli::Context::from_env()?;
//!     cli::list_playlists(&ctx).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command layer where errors of several kinds (configuration,
/// HTTP client construction, I/O) meet and are only reported to the user.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for artist: {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Token refreshed successfully!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 after printing. Only the command
/// dispatcher uses it, for failures that leave nothing useful to do, such as a
/// missing client id.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: a failed sub-request whose result is replaced
/// by a default, a duplicate archive entry, an unreadable token file.
///
/// # Example
///
/// ```
/// warning!("Error getting top tracks: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
