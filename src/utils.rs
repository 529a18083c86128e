use std::collections::BTreeMap;

use reqwest::Url;

use crate::{Error, Result};

/// String-to-string mapping used for query parameters, form fields and extra
/// headers. Ordered, so encoded URLs and bodies are deterministic.
pub type Params = BTreeMap<String, String>;

/// Builds a [`Params`] map from borrowed pairs.
pub fn params<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Params
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Parses `raw` and appends `params`, URL-encoded, to its query string.
pub fn url_with_params(raw: &str, params: Option<&Params>) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| Error::Validation(format!("invalid URL [{}]: {}", raw, e)))?;

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

/// Decodes the query string of `url` back into a [`Params`] map.
pub fn query_params(url: &Url) -> Params {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Media type of a `Content-Type` header value: parameters after `;` are
/// dropped and the result is lowercased.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_query_round_trip() {
        let mut original = HashMap::new();
        original.insert("offset".to_string(), "10".to_string());
        original.insert("limit".to_string(), "5".to_string());

        let url = url_with_params(
            "https://api.napster.com/v2.0/me/favorites",
            Some(&params(original.clone())),
        )
        .unwrap();

        let parsed: HashMap<String, String> = query_params(&url).into_iter().collect();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_url_with_params_encodes_values() {
        let url = url_with_params(
            "https://example.com/search",
            Some(&params([("q", "a b&c"), ("apikey", "k=1")])),
        )
        .unwrap();

        assert_eq!(url.query(), Some("apikey=k%3D1&q=a+b%26c"));
        assert_eq!(query_params(&url).get("q").map(String::as_str), Some("a b&c"));
    }

    #[test]
    fn test_url_without_params_has_no_query() {
        let url = url_with_params("https://example.com/tracks/a,b", None).unwrap();
        assert_eq!(url.query(), None);

        let url = url_with_params("https://example.com/tracks", Some(&Params::new())).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_with_params_rejects_garbage() {
        let err = url_with_params("not a url", None).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("application/json"), "application/json");
        assert_eq!(media_type("Application/JSON; charset=utf-8"), "application/json");
        assert_eq!(media_type("text/html;charset=UTF-8"), "text/html");
        assert_eq!(media_type(""), "");
    }
}
