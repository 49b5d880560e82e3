//! Opt-in debug logging driven by [`DebugOptions`]

use crate::types::DebugOptions;

pub fn log(debug: &Option<DebugOptions>, message: &str, detail: &str) {
    if matches!(debug, Some(opts) if opts.enabled) {
        log::debug!("[duckduckgo-news] {message}: {detail}");
    }
}

pub fn log_request(debug: &Option<DebugOptions>, message: &str) {
    if matches!(debug, Some(opts) if opts.enabled && opts.log_requests) {
        log::debug!("[duckduckgo-news] request: {message}");
    }
}

pub fn log_response(debug: &Option<DebugOptions>, message: &str) {
    if matches!(debug, Some(opts) if opts.enabled && opts.log_responses) {
        log::debug!("[duckduckgo-news] response: {message}");
    }
}
