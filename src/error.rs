//! Error types returned by the `yamusic` client

use reqwest::StatusCode;
use thiserror::Error;

use crate::http_client::RawResponse;

/// Errors that can occur while building, sending, or decoding a request
#[derive(Error, Debug)]
pub enum Error {
    /// The base URL or a request path could not be parsed
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be assembled (headers, form body)
    #[error("Unable to build request: {0}")]
    Build(#[source] reqwest::Error),

    /// The request failed on the wire
    ///
    /// `raw` is set when the status line and headers arrived but reading the body failed.
    #[error("An error occurred while attempting to {method} `{url}`: {source}")]
    Transport {
        method: reqwest::Method,
        url: String,
        #[source]
        source: reqwest::Error,
        raw: Option<Box<RawResponse>>,
    },

    /// The service answered with a non-2xx status
    #[error("Server returned {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        raw: Box<RawResponse>,
    },

    /// The response body did not match the expected shape
    #[error("Unable to deserialise response: {source}. Body was: \"{body}\"")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
        raw: Box<RawResponse>,
    },

    /// Missing or invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// The raw response, if the failure happened after the service answered
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Error::Status { raw, .. } | Error::Decode { raw, .. } => Some(raw),
            Error::Transport { raw, .. } => raw.as_deref(),
            _ => None,
        }
    }
}

/// Result type for `yamusic` operations
pub type Result<T> = std::result::Result<T, Error>;
