//! Search provider implementations

pub mod duckduckgo_news;

// Re-export providers for convenience
pub use duckduckgo_news::DuckDuckGoNewsProvider;
