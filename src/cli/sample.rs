use tabled::Table;

use crate::{config::Config, error, info, types::TrackTableRow, warning};

/// Offset used by `napcli sample` when none is given.
pub const DEFAULT_SAMPLE_OFFSET: usize = 50;
/// Page size used by `napcli sample` when none is given.
pub const DEFAULT_SAMPLE_LIMIT: usize = 10;

/// Fetches one favorites page at `offset` / `limit`, resolves it with a
/// single metadata call and prints the tracks as a table.
///
/// Exits with status 1 through `error!` on the first failure.
pub fn sample(config: &Config, offset: usize, limit: usize) {
    let (mut favorites_client, metadata_client) = match super::build_clients(config) {
        Ok(clients) => clients,
        Err(e) => error!("Cannot set up Napster clients. Err: {}", e),
    };

    info!("Getting favorites ({}):({}).", offset, limit);

    let page = match favorites_client.favorite_tracks(offset, limit) {
        Ok(page) => page,
        Err(e) => error!("Failed to get favorites. Err: {}", e),
    };

    if page.is_empty() {
        warning!("No favorites at offset {}.", offset);
        return;
    }

    info!("Retrieving track details.");

    let ids: Vec<&str> = page.iter().map(|favorite| favorite.id.as_str()).collect();
    let tracks = match metadata_client.track_details(&ids) {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to get track details. Err: {}", e),
    };

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow::new(i, track))
        .collect();

    println!("{}", Table::new(table_rows));
}
