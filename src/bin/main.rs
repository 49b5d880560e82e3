//! ddg-news CLI - Command-line front end for the duckduckgo-news crate
//!
//! Queries DuckDuckGo news through SerpApi and prints the results.

use clap::{Parser, ValueEnum};
use colored::*;
use duckduckgo_news::{DebugOptions, DuckDuckGoConfig, NewsRequest, NewsResponse, QueryNewsService};
use serde_json::Value;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "ddg-news")]
#[command(about = "DuckDuckGo news search CLI (via SerpApi)")]
#[command(version)]
struct Cli {
    /// News query keyword
    #[arg(value_name = "QUERY")]
    query: Option<String>,

    /// Region/language code (e.g., us-en, uk-en, de-de)
    #[arg(short, long, default_value = "us-en")]
    locale: String,

    /// SerpApi API key
    #[arg(long, env = "SERPAPI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the search endpoint
    #[arg(long, env = "DUCKDUCKGO_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, env = "DUCKDUCKGO_TIMEOUT_SECS", default_value = "30")]
    timeout: u64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Simple,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let Some(query) = cli.query.filter(|q| !q.trim().is_empty()) else {
        eprintln!("{}", "Error: Search query is required".red());
        eprintln!("Usage: ddg-news \"your search query\" --locale us-en");
        eprintln!("Try: ddg-news --help");
        std::process::exit(1);
    };

    let Some(api_key) = cli.api_key else {
        eprintln!("{}", "Error: SerpApi API key is required".red());
        eprintln!("Pass --api-key or set the SERPAPI_KEY environment variable");
        std::process::exit(1);
    };

    let mut config = DuckDuckGoConfig::new(&api_key)?.with_timeout(Duration::from_secs(cli.timeout));
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(&base_url)?;
    }

    let mut service = QueryNewsService::duckduckgo(config)?;
    if cli.debug {
        service = service.with_debug(DebugOptions {
            enabled: true,
            log_requests: true,
            log_responses: true,
        });
    }

    let request = NewsRequest::new(query).with_locale(cli.locale);
    match service.apply(&request).await {
        Some(response) => {
            display_results(&response, &cli.format, &request)?;
            Ok(())
        }
        None => {
            eprintln!("{}", "No news results (run with --debug for details)".red());
            std::process::exit(1);
        }
    }
}

fn news_items(response: &NewsResponse) -> &[Value] {
    ["news_results", "news"]
        .iter()
        .find_map(|key| response.get(*key).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

fn display_results(
    response: &NewsResponse,
    format: &OutputFormat,
    request: &NewsRequest,
) -> anyhow::Result<()> {
    let items = news_items(response);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        OutputFormat::Simple => {
            for (i, item) in items.iter().enumerate() {
                println!("{}. {}", i + 1, field(item, "title").unwrap_or("(untitled)"));
                if let Some(link) = field(item, "link").or_else(|| field(item, "url")) {
                    println!("   {}", link);
                }
                match (field(item, "source"), field(item, "date")) {
                    (Some(source), Some(date)) => println!("   {source} - {date}"),
                    (Some(value), None) | (None, Some(value)) => println!("   {value}"),
                    (None, None) => {}
                }
                println!();
            }
        }
        OutputFormat::Table => {
            println!(
                "{} {} {}",
                "News for".bold(),
                request.q.bold().blue(),
                format!("[{}]", request.locale()).dimmed()
            );
            println!("{}", "─".repeat(80).dimmed());

            for (i, item) in items.iter().enumerate() {
                let title = field(item, "title").unwrap_or("(untitled)");
                println!("{}. {}", (i + 1).to_string().bold(), title.bold());

                if let Some(link) = field(item, "link").or_else(|| field(item, "url")) {
                    println!("   🔗 {}", link.blue().underline());
                }

                if let Some(source) = field(item, "source") {
                    println!("   📰 {}", source.green());
                }

                if let Some(snippet) = field(item, "snippet").or_else(|| field(item, "excerpt")) {
                    let truncated = if snippet.chars().count() > 200 {
                        format!("{}...", snippet.chars().take(200).collect::<String>())
                    } else {
                        snippet.to_string()
                    };
                    println!("   📄 {}", truncated.italic());
                }

                if let Some(date) = field(item, "date") {
                    println!("   📅 {}", date.yellow());
                }

                println!();
            }

            println!("{} {}", "Total results:".bold(), items.len().to_string().bold());
        }
    }

    Ok(())
}
