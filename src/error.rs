//! Error types for the news search adapter

use thiserror::Error;

/// Result alias used across the crate
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Everything that can go wrong between a request and a parsed response
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error{}: {message}", status_suffix(.status_code))]
    HttpError {
        status_code: Option<u16>,
        message: String,
        response_body: Option<String>,
    },

    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("{0}")]
    Other(String),
}

fn status_suffix(status_code: &Option<u16>) -> String {
    status_code.map(|c| format!(" ({c})")).unwrap_or_default()
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SearchError::ParseError(err.to_string());
        }
        SearchError::HttpError {
            status_code: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
            response_body: None,
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::ParseError(err.to_string())
    }
}

impl From<url::ParseError> for SearchError {
    fn from(err: url::ParseError) -> Self {
        SearchError::ConfigError(format!("invalid base URL: {err}"))
    }
}
