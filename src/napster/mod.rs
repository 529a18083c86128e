//! # Napster Integration Module
//!
//! This module is the integration layer between napcli and the Napster web
//! API. It handles HTTP communication, the OAuth password grant and decoding of
//! API responses into the types from [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Napster Integration Layer
//!     ├── Authentication (OAuth 2.0 password grant)
//!     ├── Favorites (authenticated member)
//!     └── Metadata (catalog, API key only)
//!          ↓
//! Request Layer (reqwest blocking, JSON)
//!          ↓
//! Napster Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`request`] - Builds and sends one request: query and form encoding,
//!   extra headers, basic auth, status and content-type validation, JSON
//!   decoding.
//! - [`auth`] - [`Authenticator`] exchanges member credentials for an access
//!   token once and reuses it. Clients reach it through the
//!   [`TokenProvider`] trait so a different token strategy can be plugged in.
//! - [`favorites`] - [`FavoritesClient`] pages through the member's favorite
//!   tracks.
//! - [`metadata`] - [`MetadataClient`] resolves track details in batches.
//!
//! ## API Coverage
//!
//! - `POST /oauth/token` - Password grant with the application key pair as
//!   basic-auth credentials
//! - `GET /v2.0/me/favorites` - Favorites filtered to tracks, with offset/limit
//! - `GET /v2.0/tracks/{ids}` - Track details for comma-separated ids
//!
//! ## Error Handling
//!
//! Every call returns [`crate::Result`]. There are no retries: the first
//! failure is handed back to the caller as is. Any status code of 400 or
//! above (`status / 100 > 3`) is reported as [`crate::Error::Api`] together
//! with the response body; 1xx-3xx answers go on to content-type validation
//! and decoding.
//!
//! ## Thread Safety
//!
//! All I/O is blocking and the clients are meant for a single thread. The
//! cached token is only mutated through `&mut self`.
//!
//! ## Usage
//!
//! ```rust
//! let http = reqwest::blocking::Client::new();
//! let auth = Authenticator::from_config(http.clone(), &config)?;
//! let mut favorites = FavoritesClient::new(http.clone(), config.api_v2_url(), auth);
//! let metadata = MetadataClient::new(http, config.api_v2_url(), &config.api_key);
//!
//! let page = favorites.favorite_tracks(0, 50)?;
//! let ids: Vec<&str> = page.iter().map(|f| f.id.as_str()).collect();
//! let tracks = metadata.track_details(&ids)?;
//! ```

pub mod auth;
pub mod favorites;
pub mod metadata;
pub mod request;

pub use auth::{Authenticator, TokenProvider};
pub use favorites::FavoritesClient;
pub use metadata::MetadataClient;
