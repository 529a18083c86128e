//! Configuration management for the Napster favorites tools.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. They are read once into a [`Config`]
//! which is then handed to the client constructors; nothing reads the
//! environment after that point.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (API base URL only)

use std::{env, path::PathBuf};

use crate::{Error, Result};

/// Default base URL of the Napster API.
pub const DEFAULT_API_URL: &str = "https://api.napster.com";

pub const ENV_API_KEY: &str = "NAPSTER_API_KEY";
pub const ENV_SECRET_KEY: &str = "NAPSTER_SECRET_KEY";
pub const ENV_USERNAME: &str = "NAPSTER_USERNAME";
pub const ENV_PASSWORD: &str = "NAPSTER_PASSWORD";
pub const ENV_API_URL: &str = "NAPSTER_API_URL";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at `<data_local_dir>/napcli/.env`:
/// - Linux: `~/.local/share/napcli/.env`
/// - macOS: `~/Library/Application Support/napcli/.env`
/// - Windows: `%LOCALAPPDATA%/napcli/.env`
///
/// A missing file is fine; variables already present in the process
/// environment are never overridden.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the file exists but cannot be parsed.
pub fn load_env() -> Result<()> {
    let path = env_file_path();
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Configuration(format!("cannot load {}: {}", path.display(), e)))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("napcli/.env");
    path
}

/// Application and member credentials plus the API location.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application key, used as the basic-auth user and as `apikey`.
    pub api_key: String,
    /// Application secret, used as the basic-auth password.
    pub secret_key: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Base URL without trailing slash, e.g. `https://api.napster.com`.
    pub api_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            username: None,
            password: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Sets the member credentials used for the password grant.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Points the clients at a different API host (e.g. a local test server).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// `NAPSTER_API_KEY` and `NAPSTER_SECRET_KEY` are required.
    /// `NAPSTER_USERNAME`, `NAPSTER_PASSWORD` and `NAPSTER_API_URL` are
    /// optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| Error::Configuration(format!("{} must be set", key)))
        };

        let mut config = Self::new(require(ENV_API_KEY)?, require(ENV_SECRET_KEY)?);
        config.username = get(ENV_USERNAME);
        config.password = get(ENV_PASSWORD);

        if let Some(api_url) = get(ENV_API_URL) {
            config = config.with_api_url(api_url);
        }

        Ok(config)
    }

    /// Base URL of the versioned (v2.0) API.
    pub fn api_v2_url(&self) -> String {
        format!("{}/v2.0", self.api_url)
    }
}
