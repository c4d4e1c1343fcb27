//! # arxiv-feed
//!
//! A small client for the arXiv search API and a forgiving parser for the
//! Atom feeds it returns.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Entry, SearchRequest, QueryBuilder)
//! - [`feed`]: Pure Atom feed parser, usable without any networking
//! - [`transport`]: HTTP transport trait with a `reqwest` implementation and a mock
//! - [`client`]: `search` and `get` on top of a transport
//! - [`config`]: Configuration management
//!
//! ```rust,no_run
//! use arxiv_feed::{ArxivClient, SearchRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new()?;
//! let entries = client.search(&SearchRequest::new("cat:cs.CL").max_results(5)).await?;
//! for entry in &entries {
//!     println!("{} {}", entry.id.as_deref().unwrap_or("?"), entry.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod transport;

// Re-export commonly used types
pub use client::ArxivClient;
pub use error::ClientError;
pub use feed::{parse_feed, MalformedDocument};
pub use models::{Entry, QueryBuilder, SearchRequest, SortBy, SortOrder};
pub use transport::{Transport, TransportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
