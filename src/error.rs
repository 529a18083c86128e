//! Error types for napcli.

use thiserror::Error;

/// Main error type for Napster API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable configuration, e.g. no member credentials.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required argument was empty or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network or connection failure.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a failing status code.
    #[error("API request failed: ({status}) [{body}]")]
    Api { status: u16, body: String },

    /// The response content-type did not match what was expected.
    #[error("content-type of response unexpected: [{actual}] != [{expected}]")]
    ContentType { expected: String, actual: String },

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}
