use std::{io, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::Config,
    error, info,
    management::{DEFAULT_PAGE_SIZE, collect_favorites},
    success, warning,
};

/// Walks every favorites page and prints the artist / album / track report
/// to stdout.
///
/// Any failure is fatal: it is reported through `error!` and the process
/// exits with status 1.
pub fn favorites(config: &Config) {
    let (mut favorites_client, metadata_client) = match super::build_clients(config) {
        Ok(clients) => clients,
        Err(e) => error!("Cannot set up Napster clients. Err: {}", e),
    };

    info!("Getting favorites.");

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let collection = collect_favorites(
        &mut favorites_client,
        &metadata_client,
        DEFAULT_PAGE_SIZE,
        |offset, limit| pb.set_message(format!("Reading ({}):({})", offset, limit)),
    );
    pb.finish_and_clear();

    let collection = match collection {
        Ok(c) => c,
        Err(e) => error!("Failed to collect favorites. Err: {}", e),
    };

    if collection.is_empty() {
        warning!("No favorite tracks found.");
        return;
    }

    success!(
        "Collected {} tracks from {} artists.",
        collection.track_count(),
        collection.artist_count()
    );

    if let Err(e) = collection.write_report(&mut io::stdout().lock()) {
        error!("Failed to write report. Err: {}", e);
    }
}
