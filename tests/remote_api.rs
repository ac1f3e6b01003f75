use std::sync::Arc;
use std::time::Duration;

use rapidreport::app::NewsError;
use rapidreport::config::ApiConfig;
use rapidreport::domain::{Category, Resource};
use rapidreport::remote::{HttpNewsApi, NewsApi};
use rapidreport::repository::{ApiNewsRepository, NewsRepository};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpNewsApi {
    let config = ApiConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        timeout_secs: 1,
        ..ApiConfig::default()
    };
    HttpNewsApi::new(&config).unwrap()
}

fn articles_body() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": {"id": "reuters", "name": "Reuters"},
                "author": "Jane Doe",
                "title": "Markets rally on rate hopes",
                "description": "Stocks rose.",
                "url": "https://example.com/markets",
                "urlToImage": "https://example.com/markets.jpg",
                "publishedAt": "2024-06-22T08:31:31Z",
                "content": "Stocks rose sharply."
            },
            {
                "source": {"id": null, "name": null},
                "author": null,
                "title": "Second story",
                "description": null,
                "url": "https://example.com/second",
                "urlToImage": null,
                "publishedAt": "2024-06-21T10:00:00Z",
                "content": null
            }
        ]
    })
}

#[tokio::test]
async fn test_top_headlines_sends_category_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "business"))
        .and(query_param("country", "us"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server)
        .top_headlines(Category::Business)
        .await
        .unwrap();

    assert_eq!(response.status, "ok");
    assert_eq!(response.articles.len(), 2);
    assert_eq!(response.articles[0].source_name(), "Reuters");
    assert_eq!(response.articles[1].source_name(), "");
    assert!(response.articles[1].url_to_image.is_none());
}

#[tokio::test]
async fn test_search_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "interest rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server).search("interest rates").await.unwrap();
    assert_eq!(response.articles[0].title, "Markets rally on rate hopes");
}

#[tokio::test]
async fn test_http_error_uses_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .top_headlines(Category::General)
        .await
        .unwrap_err();

    match err {
        NewsError::HttpStatus { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Your API key is invalid or incorrect.");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_without_body_uses_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api_for(&server).search("x").await.unwrap_err();
    assert!(matches!(
        err,
        NewsError::HttpStatus { status: 503, ref message } if message == "Service Unavailable"
    ));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).search("x").await.unwrap_err();
    assert!(matches!(err, NewsError::MalformedPayload(_)));
}

#[tokio::test]
async fn test_error_status_in_ok_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "code": "parametersMissing",
            "message": "Required parameters are missing."
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).search("x").await.unwrap_err();
    assert!(matches!(
        err,
        NewsError::MalformedPayload(ref message) if message == "Required parameters are missing."
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(articles_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).search("x").await.unwrap_err();
    assert!(matches!(err, NewsError::Timeout));
}

#[tokio::test]
async fn test_unreachable_host() {
    let config = ApiConfig {
        // Port 9 (discard) is closed on test machines.
        base_url: "http://127.0.0.1:9/".to_string(),
        timeout_secs: 2,
        ..ApiConfig::default()
    };
    let api = HttpNewsApi::new(&config).unwrap();

    let err = api.top_headlines(Category::Science).await.unwrap_err();
    assert!(matches!(err, NewsError::NetworkUnreachable(_)));
}

#[tokio::test]
async fn test_repository_wraps_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repository = ApiNewsRepository::new(Arc::new(api_for(&server)));

    let headlines = repository.get_top_headlines(Category::Sports).await;
    assert_eq!(headlines.data().map(|a| a.len()), Some(2));

    let search = repository.search_for_news("anything").await;
    assert_eq!(
        search,
        Resource::Error("Failed to fetch news: HTTP 500: Internal Server Error".into())
    );
}
