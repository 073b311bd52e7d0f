//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of the fetch step. Any of these ends the analysis without a report.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input URL is too long, unparsable, or not http/https.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A redirect response carried a `Location` that cannot be resolved.
    #[error("Invalid redirect from {from} to '{location}': {source}")]
    InvalidRedirect {
        from: String,
        location: String,
        #[source]
        source: url::ParseError,
    },

    /// The redirect chain is longer than the configured hop limit.
    #[error("Too many redirects ({hops}) starting from {url}")]
    TooManyRedirects { url: String, hops: usize },

    /// The whole fetch took longer than the analysis timeout.
    #[error("Fetching {url} timed out after {seconds} seconds")]
    Timeout { url: String, seconds: u64 },

    /// The HTTP client could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// DNS, connection, TLS or transport failure.
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),
}
