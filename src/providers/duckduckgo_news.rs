//! DuckDuckGo news provider backed by SerpApi's `duckduckgo_news` engine

use crate::{
    config::DuckDuckGoConfig,
    error::{SearchError, SearchResult},
    types::{NewsRequest, NewsResponse, SearchProvider, NEWS_ENGINE},
};
use reqwest::{header::ACCEPT_CHARSET, Client};
use std::collections::HashMap;

#[derive(Debug)]
pub struct DuckDuckGoNewsProvider {
    config: DuckDuckGoConfig,
    client: Client,
}

impl DuckDuckGoNewsProvider {
    pub fn new(config: DuckDuckGoConfig) -> SearchResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn query_params<'a>(&'a self, request: &'a NewsRequest) -> [(&'static str, &'a str); 4] {
        [
            ("api_key", self.config.api_key.as_str()),
            ("engine", NEWS_ENGINE),
            ("q", request.q.as_str()),
            ("kl", request.locale()),
        ]
    }

    fn map_request_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            err.into()
        }
    }
}

#[async_trait::async_trait]
impl SearchProvider for DuckDuckGoNewsProvider {
    fn name(&self) -> &str {
        "duckduckgo_news"
    }

    async fn search(&self, request: &NewsRequest) -> SearchResult<NewsResponse> {
        if !request.has_query() {
            return Err(SearchError::InvalidInput(
                "A news search query is required".to_string(),
            ));
        }

        let response = self
            .client
            .get(self.config.base_url.clone())
            .query(&self.query_params(request))
            .header(ACCEPT_CHARSET, "utf-8")
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            return Err(SearchError::HttpError {
                status_code: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
                response_body: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(serde_json::from_str::<NewsResponse>(&body)?)
    }

    fn config(&self) -> HashMap<String, String> {
        let mut config = HashMap::new();
        config.insert("api_key".to_string(), "***".to_string());
        config.insert("base_url".to_string(), self.config.base_url.to_string());
        config.insert("engine".to_string(), NEWS_ENGINE.to_string());
        config.insert(
            "timeout_ms".to_string(),
            self.config.timeout.as_millis().to_string(),
        );
        config
    }
}
