//! Provider configuration

use crate::error::{SearchError, SearchResult};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_ENV: &str = "SERPAPI_KEY";
pub const BASE_URL_ENV: &str = "DUCKDUCKGO_BASE_URL";
pub const TIMEOUT_ENV: &str = "DUCKDUCKGO_TIMEOUT_SECS";

/// Connection settings for the DuckDuckGo news endpoint.
///
/// The API key travels as a query parameter on every request; it is never
/// refreshed or rotated by this crate.
#[derive(Debug, Clone)]
pub struct DuckDuckGoConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl DuckDuckGoConfig {
    pub fn new(api_key: &str) -> SearchResult<Self> {
        if api_key.trim().is_empty() {
            return Err(SearchError::ConfigError(
                "SerpApi API key is required".to_string(),
            ));
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("duckduckgo-news/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Build a configuration from `SERPAPI_KEY`, `DUCKDUCKGO_BASE_URL` and
    /// `DUCKDUCKGO_TIMEOUT_SECS`. Only the key is mandatory.
    pub fn from_env() -> SearchResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            SearchError::ConfigError(format!("{API_KEY_ENV} environment variable is not set"))
        })?;
        let mut config = Self::new(&api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(&base_url)?;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                SearchError::ConfigError(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> SearchResult<Self> {
        let url = Url::parse(base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SearchError::ConfigError(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}
