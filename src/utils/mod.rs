//! Shared helpers for validation and the log-and-swallow error policy

pub mod debug;

use crate::error::{SearchError, SearchResult};
use std::future::Future;

/// Run a fallible service call, logging and discarding any error.
///
/// Errors are reported under `service_name` together with a troubleshooting
/// hint and the caller only ever sees `None`.
pub async fn handle_service_error<T, F>(service_name: &str, call: F) -> Option<T>
where
    F: Future<Output = SearchResult<T>>,
{
    match call.await {
        Ok(value) => Some(value),
        Err(error) => {
            log::error!(
                "{service_name} service error: {error}. Troubleshooting: {}",
                troubleshooting_info(service_name, &error)
            );
            None
        }
    }
}

/// Provider-specific troubleshooting hint for an error
pub fn troubleshooting_info(service_name: &str, error: &SearchError) -> String {
    match error {
        SearchError::HttpError {
            status_code: Some(401 | 403),
            ..
        } => {
            "This is likely an authentication issue. Check your API key and make sure it's valid and has the correct permissions.".to_string()
        }
        SearchError::HttpError {
            status_code: Some(400),
            ..
        } => {
            "This is likely due to invalid request parameters. Check your query and locale.".to_string()
        }
        SearchError::HttpError {
            status_code: Some(429),
            ..
        } => {
            "You've exceeded the rate limit for this API. Try again later or reduce your request frequency.".to_string()
        }
        SearchError::HttpError {
            status_code: Some(500..=599),
            ..
        } => "The search provider is experiencing server issues. Try again later.".to_string(),
        SearchError::Timeout { .. } => {
            "The request timed out. Check your network connection or raise the timeout.".to_string()
        }
        SearchError::ParseError(_) => {
            "The provider answered with something other than a JSON object. Check the configured base URL.".to_string()
        }
        _ => format!("Check your {service_name} configuration and make sure your search request is valid."),
    }
}
