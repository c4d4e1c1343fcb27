//! arXiv API client.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::ClientError;
use crate::feed::parse_feed;
use crate::models::{Entry, SearchRequest};
use crate::transport::{HttpTransport, Transport};

/// Client for the arXiv search API
///
/// Supports:
/// - Search with the arXiv query language (`all:electron`, `au:Einstein`, `cat:cs.CL`)
/// - Lookup of a single entry by arXiv id
#[derive(Debug, Clone)]
pub struct ArxivClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
}

impl ArxivClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client backed by [`HttpTransport`]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::with_user_agent(&config.user_agent)?;
        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        })
    }

    /// Create with a custom transport (for testing or a shared client)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the endpoint
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Search arXiv and return the entries of the result feed in order.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Entry>, ClientError> {
        tracing::debug!(
            query = %request.query,
            start = request.start,
            max_results = request.max_results,
            sort_by = %request.sort_by,
            sort_order = %request.sort_order,
            "Searching arXiv"
        );

        let body = self
            .transport
            .get(&self.base_url, &request.to_params(), self.timeout)
            .await?;

        Ok(parse_feed(&body)?)
    }

    /// Get a single entry by arXiv id (e.g. `2101.00001` or `hep-th/9901001`).
    pub async fn get(&self, id: &str) -> Result<Option<Entry>, ClientError> {
        let request = SearchRequest::new(format!("id:{}", id)).max_results(1);
        let entries = self.search(&request).await?;
        Ok(entries.into_iter().next())
    }
}
