//! # duckduckgo-news
//!
//! DuckDuckGo news search (through SerpApi's `duckduckgo_news` engine) exposed
//! as a single callable function for tool-invocation frameworks.
//!
//! A call validates the query, issues one `GET` request and hands back the
//! upstream JSON object untouched. Failures are logged and reported as `None`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use duckduckgo_news::{DuckDuckGoConfig, NewsRequest, QueryNewsService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = QueryNewsService::duckduckgo(DuckDuckGoConfig::from_env()?)?;
//!
//!     if let Some(response) = service.apply(&NewsRequest::new("Rust programming")).await {
//!         println!("{}", serde_json::to_string_pretty(&response)?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod types;
pub mod utils;

// Re-export common types
pub use config::DuckDuckGoConfig;
pub use error::{SearchError, SearchResult as Result};
pub use service::QueryNewsService;
pub use types::{DebugOptions, NewsRequest, NewsResponse, SearchProvider, ToolDefinition};

/// One-shot news query: builds a provider from `config`, performs the call
/// and drops the provider again.
///
/// Returns `None` for an empty query, for an unusable configuration and for
/// any upstream failure. Errors are logged, never returned.
///
/// # Examples
///
/// ```rust,no_run
/// use duckduckgo_news::{query_news, DuckDuckGoConfig, NewsRequest};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DuckDuckGoConfig::new("your-serpapi-key")?;
/// let news = query_news(&config, &NewsRequest::new("rust").with_locale("uk-en")).await;
/// # Ok(())
/// # }
/// ```
pub async fn query_news(config: &DuckDuckGoConfig, request: &NewsRequest) -> Option<NewsResponse> {
    if !request.has_query() {
        return None;
    }

    let service = match QueryNewsService::duckduckgo(config.clone()) {
        Ok(service) => service,
        Err(error) => {
            log::error!("{} service error: {error}", service::SERVICE_NAME);
            return None;
        }
    };

    service.apply(request).await
}
