//! HTTP transport used by [`ArxivClient`](crate::ArxivClient).
//!
//! The [`Transport`] trait is the only thing the client needs from the network:
//! one GET with query parameters and a timeout, returning the response body.
//! [`HttpTransport`] implements it on top of `reqwest`; [`MockTransport`]
//! returns canned bodies for tests. Callers can inject their own
//! implementation with [`ArxivClient::with_transport`](crate::ArxivClient::with_transport).

mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest};

use async_trait::async_trait;
use std::time::Duration;

/// Performs a single HTTP GET and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// GET `url` with `params` appended as a query string.
    ///
    /// Non-success status codes are errors. Implementations must not retry.
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<String, TransportError>;
}

/// Errors raised while talking to the endpoint
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or body read failure
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with a non-success status code
    #[error("HTTP error: status {status} from {url}")]
    Status { status: u16, url: String },

    /// The base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}
