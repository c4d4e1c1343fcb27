//! Search arXiv and print the results as JSON.
//!
//! ```bash
//! cargo run --example search -- "cat:cs.CL" 5
//! RUST_LOG=arxiv_feed=debug cargo run --example search -- "au:Einstein"
//! ```
//!
//! The endpoint and timeout can be overridden with `ARXIV_FEED_BASE_URL` and
//! `ARXIV_FEED_TIMEOUT_SECS`.

use anyhow::{Context, Result};
use arxiv_feed::config::get_config;
use arxiv_feed::{ArxivClient, SearchRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "arxiv_feed=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| "all:electron".to_string());
    let max_results = match args.next() {
        Some(n) => n.parse().context("max_results must be a number")?,
        None => 5,
    };

    let config = get_config().context("Failed to read configuration")?;
    let client = ArxivClient::from_config(&config)?;

    let entries = client
        .search(&SearchRequest::new(query).max_results(max_results))
        .await?;

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
