use std::time::Duration;

use flashdeck::images::{HttpImageProvider, ImageError, ImageProvider, ImageResult, resolve_image};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Provider pointed at the mock server's `/images` prefix.
fn provider_for(server: &MockServer) -> HttpImageProvider {
    HttpImageProvider::new(format!("{}/images/", server.uri()))
        .expect("mock server URI should be a valid base URL")
}

// ============================================================================
// HttpImageProvider Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_returns_url_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/water"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"url": "https://cdn.test/water.png"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.fetch("water").await;

    assert_eq!(result.unwrap(), Some("https://cdn.test/water.png".to_string()));
}

#[tokio::test]
async fn test_fetch_not_found_is_no_image() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/zyzzyva"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert_eq!(provider.fetch("zyzzyva").await.unwrap(), None);
}

#[tokio::test]
async fn test_fetch_null_or_empty_url_is_no_image() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/tea"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": null})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/images/milk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"url": ""})))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert_eq!(provider.fetch("tea").await.unwrap(), None);
    assert_eq!(provider.fetch("milk").await.unwrap(), None);
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/water"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    match provider.fetch("water").await {
        Err(ImageError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/water"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert!(matches!(
        provider.fetch("water").await,
        Err(ImageError::Parse(_))
    ));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Port 1 is reserved and never has a listener in test environments
    let provider = HttpImageProvider::new("http://127.0.0.1:1/images").unwrap();
    assert!(matches!(
        provider.fetch("water").await,
        Err(ImageError::Network(_))
    ));
}

// ============================================================================
// resolve_image Tests
// ============================================================================

#[tokio::test]
async fn test_resolve_prefers_service_image() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/water"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"url": "https://cdn.test/water.png"})),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = resolve_image(Some(&provider), "water", Duration::from_secs(2)).await;

    assert_eq!(result, ImageResult::Image("https://cdn.test/water.png".to_string()));
}

#[tokio::test]
async fn test_resolve_falls_back_to_emoji_on_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/water"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = resolve_image(Some(&provider), "water", Duration::from_secs(2)).await;

    assert_eq!(result, ImageResult::Emoji("💧".to_string()));
}

#[tokio::test]
async fn test_resolve_falls_back_to_emoji_on_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/rice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"url": "https://cdn.test/rice.png"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = resolve_image(Some(&provider), "rice", Duration::from_millis(50)).await;

    assert_eq!(result, ImageResult::Emoji("🍚".to_string()));
}

#[tokio::test]
async fn test_resolve_unknown_key_without_image_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/zyzzyva"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = resolve_image(Some(&provider), "zyzzyva", Duration::from_secs(2)).await;

    assert_eq!(result, ImageResult::None);
}
