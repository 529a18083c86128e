//! Generic request plumbing shared by every Napster client.
//!
//! [`send`] performs one HTTP call and validates status and content-type;
//! [`send_json`] and [`send_discard`] layer JSON handling on top of it.

use reqwest::{
    Method,
    blocking::{Client, Response},
    header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    Error, Result,
    utils::{self, Params},
};

pub const CT_APPLICATION_JSON: &str = "application/json";

/// Credentials for HTTP basic authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Description of a single API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub params: Option<Params>,
    pub form: Option<Params>,
    pub headers: Params,
    pub basic_auth: Option<BasicAuth>,
    /// Media type the response must carry, compared case-insensitively.
    pub expected_content_type: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        ApiRequest {
            method,
            url: url.into(),
            params: None,
            form: None,
            headers: Params::new(),
            basic_auth: None,
            expected_content_type: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.to_string());
        self
    }

    pub fn form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn expect_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.expected_content_type = Some(content_type.into());
        self
    }
}

/// Sends `request` and returns the live response.
///
/// # Errors
///
/// - [`Error::Validation`] when the URL cannot be parsed
/// - [`Error::Transport`] on network failure
/// - [`Error::Api`] when `status / 100 > 3` (any 4xx or 5xx), carrying the
///   response body
/// - [`Error::ContentType`] when an expected content-type is set and the
///   response's differs or is missing
pub fn send(client: &Client, request: ApiRequest) -> Result<Response> {
    let ApiRequest {
        method,
        url,
        params,
        form,
        headers,
        basic_auth,
        expected_content_type,
    } = request;

    let url = utils::url_with_params(&url, params.as_ref())?;

    debug!(method = %method, url = %url, "Call");

    let mut builder = client.request(method, url);

    if let Some(form) = &form {
        // sets Content-Type: application/x-www-form-urlencoded
        builder = builder.form(form);
    }

    for (name, value) in &headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    if let Some(auth) = basic_auth {
        builder = builder.basic_auth(auth.username, Some(auth.password));
    }

    let response = builder.send()?;

    // 4xx and 5xx: the body becomes the error message
    let status = response.status().as_u16();
    if status / 100 > 3 {
        let body = response.text()?;
        return Err(Error::Api { status, body });
    }

    if let Some(expected) = expected_content_type {
        check_content_type(&response, &expected)?;
    }

    Ok(response)
}

fn check_content_type(response: &Response, expected: &str) -> Result<()> {
    let actual = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if actual.is_empty() || utils::media_type(actual) != expected.to_lowercase() {
        return Err(Error::ContentType {
            expected: expected.to_string(),
            actual: utils::media_type(actual),
        });
    }

    Ok(())
}

/// Sends `request` expecting a JSON answer and decodes it into `T`.
pub fn send_json<T: DeserializeOwned>(client: &Client, request: ApiRequest) -> Result<T> {
    let response = send(client, request.expect_content_type(CT_APPLICATION_JSON))?;
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

/// Sends `request` expecting a JSON answer, but only logs the body.
pub fn send_discard(client: &Client, request: ApiRequest) -> Result<()> {
    let response = send(client, request.expect_content_type(CT_APPLICATION_JSON))?;
    let body = response.text()?;
    debug!(bytes = body.len(), "Not parsing return:\n{}", body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_parts() {
        let request = ApiRequest::post("https://api.napster.com/oauth/token")
            .form_field("grant_type", "password")
            .query("offset", 10)
            .bearer_auth("abc")
            .basic_auth("key", "secret");

        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.form.as_ref().and_then(|f| f.get("grant_type")),
            Some(&"password".to_string())
        );
        assert_eq!(
            request.params.as_ref().and_then(|p| p.get("offset")),
            Some(&"10".to_string())
        );
        assert_eq!(request.headers.get("Authorization"), Some(&"Bearer abc".to_string()));
        assert_eq!(
            request.basic_auth,
            Some(BasicAuth {
                username: "key".to_string(),
                password: "secret".to_string(),
            })
        );
        assert!(request.expected_content_type.is_none());
    }

    #[test]
    fn test_plain_get_has_no_body_or_query() {
        let request = ApiRequest::get("https://api.napster.com/v2.0/tracks/tra.1");
        assert_eq!(request.method, Method::GET);
        assert!(request.params.is_none());
        assert!(request.form.is_none());
        assert!(request.headers.is_empty());
    }
}
