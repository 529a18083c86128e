//! Napster Favorites Client Library
//!
//! This library provides a small client for the Napster web API: it obtains an
//! access token through the OAuth password grant, pages through a member's
//! favorite tracks and resolves track metadata. On top of it the `napcli`
//! binary aggregates favorites into an artist/album/track listing.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - Error kinds shared by every layer
//! - `management` - Aggregation of favorites into a sorted collection
//! - `napster` - Napster web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - URL and content-type helpers
//!
//! # Example
//!
//! ```
//! use napcli::{config::Config, napster::{Authenticator, FavoritesClient}};
//!
//! fn main() -> napcli::Result<()> {
//!     let config = Config::from_env()?;
//!     let http = reqwest::blocking::Client::new();
//!     let auth = Authenticator::from_config(http.clone(), &config)?;
//!     let mut favorites = FavoritesClient::new(http, config.api_v2_url(), auth);
//!     let page = favorites.favorite_tracks(0, 10)?;
//!     println!("{} favorites", page.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod napster;
pub mod types;
pub mod utils;

pub use error::Error;

/// Result type for napcli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Progress output goes to stderr so that reports printed on stdout can be
/// piped without noise.
///
/// # Example
///
/// ```
/// info!("Reading ({}):({})", offset, limit);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only use it
/// for failures the command cannot recover from.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
