use std::{collections::HashMap, io::Write};

use tracing::debug;

use crate::{
    Result,
    napster::{FavoritesClient, MetadataClient, TokenProvider},
    types::TrackDetail,
};

/// Page size used when walking the favorites list.
pub const DEFAULT_PAGE_SIZE: usize = 50;

type AlbumTracks = HashMap<i32, String>;
type ArtistAlbums = HashMap<String, AlbumTracks>;

/// Favorite tracks grouped by artist, then album, then track index.
#[derive(Debug, Clone, Default)]
pub struct FavoritesCollection {
    artists: HashMap<String, ArtistAlbums>,
}

impl FavoritesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `track`; a track with the same artist, album and index replaces
    /// the earlier name.
    pub fn insert(&mut self, track: &TrackDetail) {
        self.artists
            .entry(track.artist_name.clone())
            .or_default()
            .entry(track.album_name.clone())
            .or_default()
            .insert(track.index, track.name.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    pub fn track_count(&self) -> usize {
        self.artists
            .values()
            .flat_map(|albums| albums.values())
            .map(|tracks| tracks.len())
            .sum()
    }

    /// Writes the sorted listing to `out`.
    ///
    /// Artists and albums are ordered lexicographically, tracks by index:
    ///
    /// ```text
    /// Artist
    ///   Album
    ///     1: Track
    ///
    /// ```
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut artists: Vec<&String> = self.artists.keys().collect();
        artists.sort();

        for artist in artists {
            writeln!(out, "{}", artist)?;

            let albums = &self.artists[artist];
            let mut album_names: Vec<&String> = albums.keys().collect();
            album_names.sort();

            for album in album_names {
                writeln!(out, "  {}", album)?;

                let tracks = &albums[album];
                let mut indices: Vec<&i32> = tracks.keys().collect();
                indices.sort();

                for index in indices {
                    writeln!(out, "    {}: {}", index, tracks[index])?;
                }

                writeln!(out)?;
            }
        }

        Ok(())
    }

    /// The listing of [`write_report`](Self::write_report) as a string.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_report(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> Extend<&'a TrackDetail> for FavoritesCollection {
    fn extend<I: IntoIterator<Item = &'a TrackDetail>>(&mut self, iter: I) {
        for track in iter {
            self.insert(track);
        }
    }
}

/// Walks the whole favorites list and resolves every page into a collection.
///
/// Starts at offset 0 and requests `page_size` entries at a time until an
/// empty page comes back. The ids of each page are resolved with a single
/// metadata call. `on_page` is called with `(offset, page_size)` before each
/// page is requested.
///
/// The first failing call aborts the walk.
pub fn collect_favorites<P, F>(
    favorites: &mut FavoritesClient<P>,
    metadata: &MetadataClient,
    page_size: usize,
    mut on_page: F,
) -> Result<FavoritesCollection>
where
    P: TokenProvider,
    F: FnMut(usize, usize),
{
    let mut collection = FavoritesCollection::new();
    let mut offset = 0;

    loop {
        on_page(offset, page_size);

        let page = favorites.favorite_tracks(offset, page_size)?;
        if page.is_empty() {
            break;
        }

        let ids: Vec<&str> = page.iter().map(|favorite| favorite.id.as_str()).collect();
        let tracks = metadata.track_details(&ids)?;
        debug!(offset, favorites = page.len(), tracks = tracks.len(), "Resolved page");

        collection.extend(&tracks);
        offset += page.len();
    }

    Ok(collection)
}
