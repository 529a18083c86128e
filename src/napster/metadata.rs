use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    napster::request::{self, ApiRequest},
    types::{TrackDetail, TrackDetailResponse},
};

/// Client for public catalog metadata; only needs the application key.
pub struct MetadataClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl MetadataClient {
    /// `api_url` is the v2 base, e.g. `https://api.napster.com/v2.0`. The key
    /// is sent as the `apikey` query parameter on every call.
    pub fn new(http: Client, api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        MetadataClient {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolves the details of several tracks in one call.
    ///
    /// Tracks come back in the order the server returns them, which is
    /// expected (not checked) to follow `ids`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `ids` is empty; no request is sent then.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub fn track_details<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<TrackDetail>> {
        if ids.is_empty() {
            return Err(Error::Validation("no tracks provided".into()));
        }

        let inline = ids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        let request = ApiRequest::get(format!("{}/tracks/{}", self.api_url, inline))
            .query("apikey", &self.api_key);

        let res: TrackDetailResponse = request::send_json(&self.http, request)?;
        debug!(resolved = res.tracks.len(), "Got track details");

        Ok(res.tracks)
    }
}
