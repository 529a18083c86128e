use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Decodes an explicit JSON `null` as the type's default value.
///
/// `#[serde(default)]` only covers absent fields; the catalog also sends
/// `null` for values it does not know, e.g. `isrc` or `previewURL`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of the OAuth token endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// One entry of a member's favorites list.
///
/// `links` varies by favorite type, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackReference {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub links: serde_json::Value,
}

impl fmt::Display for TrackReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (favorited {})", self.id, self.date.to_rfc3339())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteTracksResponse {
    #[serde(default)]
    pub favorites: Vec<TrackReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackFormat {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bitrate: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// Full metadata record of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackDetail {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Position of the track on its disc.
    #[serde(deserialize_with = "null_as_default")]
    pub index: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub disc: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    #[serde(deserialize_with = "null_as_default")]
    pub playback_seconds: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub explicit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isrc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shortcut: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub album_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub formats: Vec<TrackFormat>,
    #[serde(deserialize_with = "null_as_default")]
    pub album_id: String,
    /// Role -> artist id, e.g. `primaryArtist`.
    #[serde(deserialize_with = "null_as_default")]
    pub contributors: HashMap<String, String>,
    #[serde(rename = "previewURL", deserialize_with = "null_as_default")]
    pub preview_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_streamable: bool,
}

impl fmt::Display for TrackDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} / {}",
            self.id, self.artist_name, self.album_name, self.name
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackDetailResponse {
    #[serde(default)]
    pub tracks: Vec<TrackDetail>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub id: String,
}

impl TrackTableRow {
    pub fn new(position: usize, track: &TrackDetail) -> Self {
        TrackTableRow {
            position,
            name: track.name.clone(),
            artist: track.artist_name.clone(),
            album: track.album_name.clone(),
            id: track.id.clone(),
        }
    }
}
