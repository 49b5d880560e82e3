//! Core types shared by the provider, the service and the CLI

use crate::error::SearchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Locale sent when the caller does not pick one
pub const DEFAULT_LOCALE: &str = "us-en";

/// Engine selector understood by the upstream API
pub const NEWS_ENGINE: &str = "duckduckgo_news";

/// Upstream JSON body, passed through untouched
pub type NewsResponse = Map<String, Value>;

/// A news query as received from a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    /// The query keyword e.g. spring-ai-alibaba
    pub q: String,
    /// Region/language code, e.g. `us-en`, `uk-en`, `de-de`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kl: Option<String>,
}

impl NewsRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            q: query.into(),
            kl: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.kl = Some(locale.into());
        self
    }

    /// Locale to send upstream; blank values fall back to [`DEFAULT_LOCALE`]
    pub fn locale(&self) -> &str {
        self.kl
            .as_deref()
            .map(str::trim)
            .filter(|kl| !kl.is_empty())
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn has_query(&self) -> bool {
        !self.q.trim().is_empty()
    }
}

/// Debug options for a service
#[derive(Debug, Clone, Default)]
pub struct DebugOptions {
    pub enabled: bool,
    pub log_requests: bool,
    pub log_responses: bool,
}

/// Description of a callable tool, in the shape LLM tool-calling APIs expect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the accepted arguments
    pub parameters: Value,
}

/// Anything that can answer a [`NewsRequest`] with a raw JSON map
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Perform exactly one upstream request
    async fn search(&self, request: &NewsRequest) -> SearchResult<NewsResponse>;

    /// Provider configuration, secrets masked
    fn config(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}
