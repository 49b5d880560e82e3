//! The news query service: the callable face of this crate.
//!
//! [`QueryNewsService::apply`] validates the request, performs one upstream
//! call through its [`SearchProvider`] and returns the raw JSON map. Every
//! failure is logged under the `DuckDuckGo` service name and turned into
//! `None`; nothing is propagated to the caller.

use crate::{
    config::DuckDuckGoConfig,
    error::SearchResult,
    providers::DuckDuckGoNewsProvider,
    types::{DebugOptions, NewsRequest, NewsResponse, SearchProvider, ToolDefinition},
    utils::{debug, handle_service_error},
};
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "DuckDuckGo";
pub const TOOL_NAME: &str = "duckDuckGoQueryNews";
pub const TOOL_DESCRIPTION: &str = "Use DuckDuckGo search to query for the latest news.";

#[derive(Debug)]
pub struct QueryNewsService {
    provider: Box<dyn SearchProvider>,
    debug: Option<DebugOptions>,
}

impl QueryNewsService {
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            debug: None,
        }
    }

    /// Service talking to the real DuckDuckGo news endpoint
    pub fn duckduckgo(config: DuckDuckGoConfig) -> SearchResult<Self> {
        Ok(Self::new(Box::new(DuckDuckGoNewsProvider::new(config)?)))
    }

    pub fn with_debug(mut self, debug: DebugOptions) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Query the news engine. `None` means either an empty query (no call is
    /// made) or an upstream failure that has already been logged.
    pub async fn apply(&self, request: &NewsRequest) -> Option<NewsResponse> {
        if !request.has_query() {
            log::debug!("{SERVICE_NAME}: ignoring news request with an empty query");
            return None;
        }

        debug::log(
            &self.debug,
            "Performing news search",
            &format!("provider: {}, query: {}", self.provider.name(), request.q),
        );
        debug::log_request(
            &self.debug,
            &format!(
                "q={} kl={} config={:?}",
                request.q,
                request.locale(),
                self.provider.config()
            ),
        );

        let response = handle_service_error(SERVICE_NAME, self.provider.search(request)).await?;

        debug::log_response(
            &self.debug,
            &format!("received {} top-level keys", response.len()),
        );
        Some(response)
    }

    /// Entry point for tool-calling frameworks that hand over raw JSON arguments
    pub async fn invoke(&self, arguments: Value) -> Option<Value> {
        let request: NewsRequest = match serde_json::from_value(arguments) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("{SERVICE_NAME}: invalid tool arguments: {e}");
                return None;
            }
        };

        self.apply(&request).await.map(Value::Object)
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: json!({
                "type": "object",
                "description": "duckduckgo search request",
                "properties": {
                    "q": {
                        "type": "string",
                        "description": "The query keyword e.g. spring-ai-alibaba"
                    },
                    "kl": {
                        "type": "string",
                        "description": "Region and language of the results, e.g. us-en, uk-en, de-de",
                        "default": crate::types::DEFAULT_LOCALE
                    }
                },
                "required": ["q"]
            }),
        }
    }
}
