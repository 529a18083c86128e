use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    config::Config,
    napster::request::{self, ApiRequest},
    types::AccessToken,
};

/// Source of bearer tokens for authenticated API calls.
///
/// Clients only ever ask for a token string; how it is obtained, cached or
/// renewed is up to the implementation.
pub trait TokenProvider {
    fn access_token(&mut self) -> Result<String>;
}

/// Obtains an access token through the OAuth resource-owner password grant.
///
/// The first successful [`authenticate`](Self::authenticate) caches the token
/// for the lifetime of the instance. The token is never refreshed, even after
/// `expires_in` has elapsed.
pub struct Authenticator {
    http: Client,
    api_url: String,
    access_key: String,
    secret_key: String,
    username: String,
    password: String,
    token: Option<AccessToken>,
}

impl Authenticator {
    /// Creates an authenticator for the API at `api_url` using the
    /// application's key pair. Member credentials must be added with
    /// [`set_credentials`](Self::set_credentials) before authenticating.
    pub fn new(
        http: Client,
        api_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Authenticator {
            http,
            api_url: api_url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            username: String::new(),
            password: String::new(),
            token: None,
        }
    }

    /// Creates an authenticator from `config`, applying member credentials
    /// when both are configured.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if only one of username and password is set.
    pub fn from_config(http: Client, config: &Config) -> Result<Self> {
        let mut auth = Self::new(
            http,
            config.api_url.clone(),
            config.api_key.clone(),
            config.secret_key.clone(),
        );

        match (&config.username, &config.password) {
            (None, None) => {}
            (username, password) => auth.set_credentials(
                username.as_deref().unwrap_or_default(),
                password.as_deref().unwrap_or_default(),
            )?,
        }

        Ok(auth)
    }

    /// Sets the member credentials used for the password grant.
    pub fn set_credentials(&mut self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(Error::Validation("username empty".into()));
        }
        if password.is_empty() {
            return Err(Error::Validation("password empty".into()));
        }

        self.username = username.to_string();
        self.password = password.to_string();
        Ok(())
    }

    /// Returns the bearer token, fetching it on first use.
    ///
    /// # Errors
    ///
    /// - [`Error::Configuration`] if no member credentials were set
    /// - any request error of the token call; the authenticator then stays
    ///   unauthenticated and the next call tries again
    #[instrument(skip(self))]
    pub fn authenticate(&mut self) -> Result<String> {
        if let Some(token) = &self.token {
            return Ok(token.access_token.clone());
        }

        let token = self.fetch_token()?;
        debug!(expires_in = token.expires_in, "Obtained access token");

        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    /// Whether a token is cached. Never resets once true.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The cached token, if [`authenticate`](Self::authenticate) succeeded.
    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    fn fetch_token(&self) -> Result<AccessToken> {
        // only the password grant is supported
        if self.username.is_empty() || self.password.is_empty() {
            return Err(Error::Configuration(
                "only user-credentials authentication currently supported".into(),
            ));
        }

        debug!(username = %self.username, "Requesting access token");

        let request = ApiRequest::post(format!("{}/oauth/token", self.api_url))
            .form_field("username", self.username.as_str())
            .form_field("password", self.password.as_str())
            .form_field("grant_type", "password")
            .basic_auth(self.access_key.as_str(), self.secret_key.as_str());

        request::send_json(&self.http, request)
    }
}

impl TokenProvider for Authenticator {
    fn access_token(&mut self) -> Result<String> {
        self.authenticate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(Client::new(), "http://127.0.0.1:9", "key", "secret")
    }

    #[test]
    fn test_set_credentials_rejects_empty_values() {
        let mut auth = authenticator();

        let err = auth.set_credentials("", "pass").unwrap_err();
        assert!(matches!(err, Error::Validation(msg) if msg == "username empty"));

        let err = auth.set_credentials("user", "").unwrap_err();
        assert!(matches!(err, Error::Validation(msg) if msg == "password empty"));

        assert!(auth.set_credentials("user", "pass").is_ok());
    }

    #[test]
    fn test_authenticate_without_credentials() {
        let mut auth = authenticator();

        let err = auth.authenticate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(!auth.is_authenticated());
        assert!(auth.token().is_none());
    }

    #[test]
    fn test_from_config_applies_credentials() {
        let config = Config::new("key", "secret").with_user("user", "pass");
        let auth = Authenticator::from_config(Client::new(), &config).unwrap();
        assert_eq!(auth.username, "user");
        assert_eq!(auth.password, "pass");

        let config = Config::new("key", "secret");
        let auth = Authenticator::from_config(Client::new(), &config).unwrap();
        assert!(auth.username.is_empty());

        let mut config = Config::new("key", "secret");
        config.username = Some("user".into());
        let err = Authenticator::from_config(Client::new(), &config)
            .err()
            .unwrap();
        assert!(matches!(err, Error::Validation(_)));
    }
}
