//! Wiring the news query into a tool-calling loop
//!
//! Prints the tool definition an LLM would see, then dispatches a tool call
//! the way a framework would, with raw JSON arguments.

use duckduckgo_news::{DuckDuckGoConfig, QueryNewsService};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let definition = QueryNewsService::definition();
    println!("🔧 Tool definition:");
    println!("{}\n", serde_json::to_string_pretty(&definition)?);

    let service = QueryNewsService::duckduckgo(DuckDuckGoConfig::from_env()?)?;

    // Arguments as an LLM would produce them
    let arguments = json!({ "q": "spring-ai-alibaba" });
    println!("📞 Calling {} with {arguments}", definition.name);

    match service.invoke(arguments).await {
        Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        None => println!("Tool returned null"),
    }

    Ok(())
}
