//! Basic news search using the duckduckgo-news crate
//!
//! Run with `SERPAPI_KEY=... cargo run --example basic_news_search`

use duckduckgo_news::{DebugOptions, DuckDuckGoConfig, NewsRequest, QueryNewsService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("🦆 Querying DuckDuckGo news...");

    let service = QueryNewsService::duckduckgo(DuckDuckGoConfig::from_env()?)?.with_debug(
        DebugOptions {
            enabled: true,
            log_requests: false,
            log_responses: true,
        },
    );

    let request = NewsRequest::new("Rust programming").with_locale("us-en");
    let Some(response) = service.apply(&request).await else {
        println!("No results, set RUST_LOG=error to see why");
        return Ok(());
    };

    let items = response
        .get("news_results")
        .or_else(|| response.get("news"))
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    println!("Found {} stories:", items.len());
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item["title"].as_str().unwrap_or("(untitled)"));
        if let Some(link) = item["link"].as_str() {
            println!("   URL: {link}");
        }
        println!();
    }

    Ok(())
}
