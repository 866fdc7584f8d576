//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use art_gallery::{http, InMemoryDocumentStore};
use serde_json::{json, Value};

use crate::support::{small_gallery, TestCatalog};

/// Bind to port 0 and return the base URL.
async fn start_server(catalog: Arc<TestCatalog>) -> String {
    let app = http::router(catalog);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn gallery() -> (Arc<TestCatalog>, String) {
    let catalog = Arc::new(small_gallery());
    let base = start_server(catalog.clone()).await;
    (catalog, base)
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn health_check() {
    let (_, base) = gallery().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn list_gallery_embeds_authors() {
    let (_, base) = gallery().await;

    let body: Value = reqwest::get(format!("{base}/gallery"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["1", "6", "7"]);
    assert_eq!(body[0]["author"]["name"], "Vincent van Gogh");
    assert_eq!(body[0]["is_popular"], true);
    assert_eq!(body[2]["is_favorite"], false);
}

#[tokio::test]
async fn gallery_filters_by_author_before_search() {
    let (_, base) = gallery().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{base}/gallery"))
        .query(&[("author", "vango"), ("search", "mona")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["1", "7"]);

    let body: Value = client
        .get(format!("{base}/gallery"))
        .query(&[("search", "VINCI")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["6"]);
}

#[tokio::test]
async fn empty_search_result_is_an_empty_array() {
    let (_, base) = gallery().await;

    let body: Value = reqwest::get(format!("{base}/gallery?search=guernica"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn post_painting_returns_201() {
    let (catalog, base) = gallery().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/gallery"))
        .json(&json!({
            "id": "8",
            "title": "Café Terrace at Night",
            "author_id": "vango",
            "year": 1888,
            "image_url": "https://example.org/cafe.jpg",
            "is_favorite": false,
            "is_popular": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    assert_eq!(catalog.list_paintings().unwrap().len(), 4);
}

#[tokio::test]
async fn post_painting_with_unknown_author_returns_400() {
    let (catalog, base) = gallery().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/gallery"))
        .json(&json!({ "id": "9", "title": "Phantom", "author_id": "ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "author not found: ghost");
    assert_eq!(catalog.list_paintings().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let (_, base) = gallery().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/gallery"))
        .header("content-type", "application/json")
        .body("{ nope")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn delete_and_patch_report_not_found() {
    let (_, base) = gallery().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/gallery?id=404"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .patch(format!("{base}/gallery?id=404"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn delete_and_patch_existing_painting() {
    let (catalog, base) = gallery().await;
    let client = reqwest::Client::new();

    let resp = client
        .patch(format!("{base}/gallery?id=7"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(catalog.list_paintings().unwrap()[2].is_favorite);

    let resp = client
        .delete(format!("{base}/gallery?id=6"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let remaining: Vec<String> = catalog
        .list_paintings()
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(remaining, vec!["1", "7"]);
}

#[tokio::test]
async fn authors_list_and_add() {
    let (_, base) = gallery().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/authors"))
        .json(&json!({ "id": "monet", "name": "Claude Monet", "birth_year": 1840, "country": "France", "portrait": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = client
        .post(format!("{base}/authors"))
        .json(&json!({ "id": "monet", "name": "Claude Monet" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(format!("{base}/authors"))
        .json(&json!({ "id": "anon", "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = client
        .get(format!("{base}/authors"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["vango", "da-vinci", "monet"]);
}

#[tokio::test]
async fn facts_and_popular() {
    let (_, base) = gallery().await;

    let facts: Value = reqwest::get(format!("{base}/facts"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&facts), vec!["1"]);

    let popular: Value = reqwest::get(format!("{base}/popular"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&popular), vec!["1", "6"]);
}

#[tokio::test]
async fn unsupported_method_returns_405() {
    let (_, base) = gallery().await;

    let resp = reqwest::Client::new()
        .delete(format!("{base}/authors"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn failed_flush_returns_500_and_keeps_state() {
    let (catalog, base) = gallery().await;
    let store: &InMemoryDocumentStore = catalog.store();
    store.set_fail_writes(true);

    let resp = reqwest::Client::new()
        .patch(format!("{base}/gallery?id=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert!(!catalog.list_paintings().unwrap()[0].is_favorite);
}
