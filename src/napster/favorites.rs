use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::{
    Result,
    napster::{
        auth::{Authenticator, TokenProvider},
        request::{self, ApiRequest},
    },
    types::{FavoriteTracksResponse, TrackReference},
};

/// Client for the authenticated member's favorites.
pub struct FavoritesClient<P: TokenProvider = Authenticator> {
    http: Client,
    api_url: String,
    tokens: P,
}

impl<P: TokenProvider> FavoritesClient<P> {
    /// Creates a client for the v2 API at `api_url`, authenticating through
    /// `tokens`.
    pub fn new(http: Client, api_url: impl Into<String>, tokens: P) -> Self {
        FavoritesClient {
            http,
            api_url: api_url.into(),
            tokens,
        }
    }

    /// Retrieves one page of the member's favorite tracks.
    ///
    /// An empty result marks the end of the list.
    ///
    /// # Errors
    ///
    /// Token errors from the provider, and any request or decode error of the
    /// favorites call.
    #[instrument(skip(self))]
    pub fn favorite_tracks(&mut self, offset: usize, limit: usize) -> Result<Vec<TrackReference>> {
        let token = self.tokens.access_token()?;

        let request = ApiRequest::get(format!("{}/me/favorites", self.api_url))
            .query("rights", 0)
            .query("filter", "track")
            .query("offset", offset)
            .query("limit", limit)
            .bearer_auth(&token);

        let res: FavoriteTracksResponse = request::send_json(&self.http, request)?;
        debug!(count = res.favorites.len(), "Got favorites");

        Ok(res.favorites)
    }

    /// The provider this client authenticates through.
    pub fn token_provider(&self) -> &P {
        &self.tokens
    }
}
