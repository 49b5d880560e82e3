//! Integration tests for the duckduckgo-news crate
//!
//! Every test talks to a local wiremock server standing in for the upstream API.

use duckduckgo_news::{
    query_news, DuckDuckGoConfig, NewsRequest, QueryNewsService, SearchError, SearchProvider,
};
use duckduckgo_news::providers::DuckDuckGoNewsProvider;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> DuckDuckGoConfig {
    DuckDuckGoConfig::new("test-api-key")
        .unwrap()
        .with_base_url(&format!("{}/search", server.uri()))
        .unwrap()
}

fn service_for(server: &MockServer) -> QueryNewsService {
    QueryNewsService::duckduckgo(config_for(server)).unwrap()
}

fn sample_news() -> Value {
    json!({
        "search_metadata": { "status": "Success" },
        "news": [
            {
                "position": 1,
                "title": "Rust 1.80 released",
                "link": "https://blog.rust-lang.org/",
                "source": "Rust Blog",
                "date": "2 hours ago"
            },
            {
                "position": 2,
                "title": "Why teams pick Rust",
                "link": "https://example.com/rust",
                "source": "Example News",
                "date": "1 day ago"
            }
        ]
    })
}

#[tokio::test]
async fn test_success_returns_body_unchanged() {
    let server = MockServer::start().await;
    let body = sample_news();

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("api_key", "test-api-key"))
        .and(query_param("engine", "duckduckgo_news"))
        .and(query_param("q", "rust"))
        .and(query_param("kl", "us-en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let response = service_for(&server)
        .apply(&NewsRequest::new("rust"))
        .await
        .expect("expected a response");

    assert_eq!(Value::Object(response), body);
}

#[tokio::test]
async fn test_explicit_locale_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("kl", "de-de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "news": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = service_for(&server)
        .apply(&NewsRequest::new("wetter").with_locale("de-de"))
        .await;

    assert_eq!(response.map(Value::Object), Some(json!({ "news": [] })));
}

#[tokio::test]
async fn test_query_is_encoded() {
    let server = MockServer::start().await;
    let query = "rust & c++ \"async\" 中文";

    Mock::given(method("GET"))
        .and(query_param("q", query))
        .and(header("Accept-Charset", "utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "news": [] })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(service_for(&server)
        .apply(&NewsRequest::new(query))
        .await
        .is_some());
}

#[tokio::test]
async fn test_empty_query_makes_no_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_news()))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert!(service.apply(&NewsRequest::new("")).await.is_none());
    assert!(service.apply(&NewsRequest::new("   ")).await.is_none());
    assert!(service.invoke(json!({ "q": "" })).await.is_none());
}

#[tokio::test]
async fn test_server_error_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(service_for(&server)
        .apply(&NewsRequest::new("rust"))
        .await
        .is_none());
}

#[tokio::test]
async fn test_server_error_is_logged_and_empty_query_is_not() {
    testing_logger::setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);

    assert!(service.apply(&NewsRequest::new("rust")).await.is_none());
    testing_logger::validate(|logs| {
        let error = logs
            .iter()
            .find(|l| l.level == log::Level::Error)
            .expect("upstream failure should be logged at error level");
        assert!(error.body.contains("DuckDuckGo"));
        assert!(error.body.contains("503"));
    });

    assert!(service.apply(&NewsRequest::new("")).await.is_none());
    testing_logger::validate(|logs| {
        assert!(!logs.iter().any(|l| l.level == log::Level::Error));
    });
}

#[tokio::test]
async fn test_unauthorized_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid API key." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    assert!(service_for(&server)
        .apply(&NewsRequest::new("rust"))
        .await
        .is_none());
}

#[tokio::test]
async fn test_malformed_json_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    assert!(service_for(&server)
        .apply(&NewsRequest::new("rust"))
        .await
        .is_none());
}

#[tokio::test]
async fn test_non_object_json_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(service_for(&server)
        .apply(&NewsRequest::new("rust"))
        .await
        .is_none());
}

#[tokio::test]
async fn test_timeout_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_news())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(Duration::from_millis(100));
    let service = QueryNewsService::duckduckgo(config).unwrap();

    assert!(service.apply(&NewsRequest::new("rust")).await.is_none());
}

#[tokio::test]
async fn test_unreachable_host_yields_none() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    drop(server);

    assert!(query_news(&config, &NewsRequest::new("rust")).await.is_none());
}

#[tokio::test]
async fn test_provider_reports_typed_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let provider = DuckDuckGoNewsProvider::new(config_for(&server)).unwrap();
    match provider.search(&NewsRequest::new("rust")).await {
        Err(SearchError::HttpError {
            status_code,
            response_body,
            ..
        }) => {
            assert_eq!(status_code, Some(429));
            assert_eq!(response_body.as_deref(), Some("slow down"));
        }
        other => panic!("Expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_provider_reports_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(Duration::from_millis(100));
    let provider = DuckDuckGoNewsProvider::new(config).unwrap();

    match provider.search(&NewsRequest::new("rust")).await {
        Err(SearchError::Timeout { timeout_ms }) => assert_eq!(timeout_ms, 100),
        other => panic!("Expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_news_one_shot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "spring-ai-alibaba"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_news()))
        .expect(1)
        .mount(&server)
        .await;

    let response = query_news(&config_for(&server), &NewsRequest::new("spring-ai-alibaba")).await;
    assert_eq!(response.map(Value::Object), Some(sample_news()));
}

#[tokio::test]
async fn test_invoke_with_tool_arguments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "climate"))
        .and(query_param("kl", "uk-en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_news()))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server)
        .invoke(json!({ "q": "climate", "kl": "uk-en" }))
        .await;

    assert_eq!(result, Some(sample_news()));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_news()))
        .expect(5)
        .mount(&server)
        .await;

    let service = Arc::new(service_for(&server));
    let handles: Vec<_> = (0..5)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.apply(&NewsRequest::new(format!("topic {i}"))).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }
}
