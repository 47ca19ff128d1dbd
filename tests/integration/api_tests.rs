//! API integration tests
//!
//! Run against a live server backed by a fresh database:
//! `cargo test -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

async fn create_book(client: &Client, title: &str, author: &str, category_id: i64) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": author,
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_with_unknown_category() {
    let client = Client::new();
    let created = create_book(&client, "T1", "A1", 424242).await;
    let category_id = created["category_id"].as_i64().expect("No category ID");

    let response = client
        .get(format!("{}/books/category/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["title"], "T1");
    assert_eq!(books[0]["author"], "A1");
}

#[tokio::test]
#[ignore]
async fn test_create_get_and_delete_book() {
    let client = Client::new();
    let created = create_book(&client, "Dune", "Frank Herbert", 777777).await;
    let book_id = created["id"].as_i64().expect("No book ID");
    let category_id = created["category_id"].as_i64().expect("No category ID");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"id": book_id, "title": "Dune", "author": "Frank Herbert"}));

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book and Category deleted successfully");

    let response = client
        .get(format!("{}/books/category/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_delete_keeps_shared_category() {
    let client = Client::new();
    let first = create_book(&client, "First", "A", 888888).await;
    let category_id = first["category_id"].as_i64().expect("No category ID");
    let second = create_book(&client, "Second", "B", category_id).await;
    assert_eq!(second["category_id"], json!(category_id));

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, first["id"]))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book deleted successfully");

    let response = client
        .get(format!("{}/books/category/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let books: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(books[0]["id"], second["id"]);
}

#[tokio::test]
#[ignore]
async fn test_create_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Only a title" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}
