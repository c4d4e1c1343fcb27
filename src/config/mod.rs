//! Configuration management.
//!
//! Settings come from built-in defaults, optionally a TOML file, and
//! `ARXIV_FEED_*` environment variables, in increasing order of precedence.
//!
//! ```toml
//! base_url = "http://export.arxiv.org/api/query"
//! timeout_secs = 15
//! user_agent = "my-tool/1.0"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub use config::ConfigError;

/// Base URL for arXiv API
pub const DEFAULT_BASE_URL: &str = "http://export.arxiv.org/api/query";
/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Prefix of environment variables read by [`get_config`] and [`load_config`]
pub const ENV_PREFIX: &str = "ARXIV_FEED";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint queried by `search` and `get`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Get the configuration from environment variables and defaults
pub fn get_config() -> Result<ClientConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://export.arxiv.org/api/query");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.user_agent.starts_with("arxiv-feed/"));
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!(
            "arxiv-feed-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "timeout_secs = 42\nuser_agent = \"tests/0.0\"\n").unwrap();

        let config = load_config(&path);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.timeout_secs, 42);
        assert_eq!(config.user_agent, "tests/0.0");
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = std::env::temp_dir().join("arxiv-feed-does-not-exist.toml");
        assert!(load_config(&path).is_err());
    }
}
