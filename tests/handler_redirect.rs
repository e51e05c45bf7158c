mod common;

use serde_json::json;
use slugger::domain::entities::UrlMapping;
use slugger::domain::repositories::UrlStore;
use slugger::infrastructure::persistence::MemoryUrlStore;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let store = Arc::new(MemoryUrlStore::new());
    store
        .insert(&UrlMapping::new("abc123", "https://example.com/target"))
        .await
        .unwrap();
    let server = common::test_server(common::hash_state(store));

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::test_server(common::hash_state(Arc::new(MemoryUrlStore::new())));

    let response = server.get("/abc123").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_unknown_long_path() {
    let server = common::test_server(common::hash_state(Arc::new(MemoryUrlStore::new())));

    server.get("/doesnotexist").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_nested_path_is_not_found() {
    let server = common::test_server(common::hash_state(Arc::new(MemoryUrlStore::new())));

    server.get("/abc123/extra").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::test_server(common::create_test_state(
        Arc::new(common::UnavailableStore),
        Arc::new(slugger::domain::slug::HashSlugAssigner::new()),
    ));

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_shorten_then_redirect_roundtrip() {
    let server = common::test_server(common::hash_state(Arc::new(MemoryUrlStore::new())));

    for url in [
        "https://example.com",
        "https://example.com/path?query=1&b=two",
        "http://sub.example.org:8081/a/b/c#section",
        "https://example.com/%E2%9C%93",
    ] {
        let json = server
            .post("/shorten")
            .json(&json!({ "url": url }))
            .await
            .json::<serde_json::Value>();
        let slug = common::slug_of(json["shortened_url"].as_str().unwrap()).to_string();

        let response = server.get(&format!("/{slug}")).await;

        assert_eq!(response.status_code(), 307, "url: {url}");
        assert_eq!(response.header("location"), url);
    }
}

#[tokio::test]
async fn test_random_strategy_roundtrip() {
    let server = common::test_server(common::random_state(Arc::new(MemoryUrlStore::new()), 5));

    let json = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let shortened = json["shortened_url"].as_str().unwrap();
    assert!(shortened.starts_with(common::BASE_URL));

    let slug = common::slug_of(shortened);
    let response = server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}
