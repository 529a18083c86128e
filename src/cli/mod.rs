//! # CLI Module
//!
//! User-facing commands of napcli. Each command builds the Napster clients
//! from a [`Config`], runs its flow and reports progress with the crate's
//! output macros. Any failure is fatal: the command prints the error and the
//! process exits with status 1.
//!
//! ## Commands
//!
//! - [`favorites`] - Walks all favorite tracks and prints them grouped by
//!   artist and album
//! - [`sample`] - Resolves a single page of favorites and prints it as a table
//!
//! ## Output
//!
//! Progress, warnings and errors go to stderr; the report itself goes to
//! stdout so it can be redirected into a file.

mod favorites;
mod sample;

pub use favorites::favorites;
pub use sample::{DEFAULT_SAMPLE_LIMIT, DEFAULT_SAMPLE_OFFSET, sample};

use reqwest::blocking::Client;

use crate::{
    Result,
    config::Config,
    napster::{Authenticator, FavoritesClient, MetadataClient},
};

/// Builds the favorites and metadata clients sharing one HTTP client.
fn build_clients(config: &Config) -> Result<(FavoritesClient, MetadataClient)> {
    let http = Client::new();
    let auth = Authenticator::from_config(http.clone(), config)?;

    let favorites = FavoritesClient::new(http.clone(), config.api_v2_url(), auth);
    let metadata = MetadataClient::new(http, config.api_v2_url(), &config.api_key);

    Ok((favorites, metadata))
}
