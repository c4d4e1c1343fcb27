//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use super::{Transport, TransportError};

/// Body returned when no response has been configured
pub const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: empty</title>
</feed>"#;

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub timeout: Duration,
}

impl RecordedRequest {
    /// Value of a query parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A mock transport that returns a predefined response and records requests.
#[derive(Debug, Default)]
pub struct MockTransport {
    response: Mutex<Option<Result<String, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Create a new mock transport that serves an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport that serves `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        let transport = Self::new();
        transport.set_response(Ok(body.into()));
        transport
    }

    /// Set the response to return.
    pub fn set_response(&self, response: Result<String, TransportError>) {
        *lock(&self.response) = Some(response);
    }

    /// Clear the configured response.
    pub fn clear_response(&self) {
        *lock(&self.response) = None;
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<String, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            timeout,
        });

        match &*lock(&self.response) {
            Some(response) => response.clone(),
            None => Ok(EMPTY_FEED.to_string()),
        }
    }
}
